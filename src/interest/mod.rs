pub mod accrual;
pub mod balances;
pub mod rules;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

pub use accrual::AccrualEngine;
pub use balances::DailyBalances;
pub use rules::{InterestRule, RuleTimeline};

/// one constant-rate slice of an accrual window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    pub start: NaiveDate,
    /// inclusive
    pub end: NaiveDate,
    pub days: u32,
    /// end-of-day balance at `start`, held constant across the slice
    pub balance: Money,
    pub rate: Rate,
    /// unrounded contribution of this slice
    pub interest: Money,
}

/// accrual over a date range: the rounded total plus the slices behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// total simple interest, rounded once, half away from zero
    pub interest: Money,
    pub periods: Vec<AccrualPeriod>,
}

impl AccrualResult {
    pub fn zero() -> Self {
        Self {
            interest: Money::ZERO,
            periods: Vec::new(),
        }
    }
}
