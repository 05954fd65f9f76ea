use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::decimal::Rate;
use crate::errors::{LedgerError, Result};

/// an interest rule: annual rate in effect from its date until superseded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRule {
    pub effective_date: NaiveDate,
    /// display identifier, not a uniqueness key
    pub rule_id: String,
    pub rate: Rate,
}

/// piecewise-constant rate timeline keyed by effective date, so at most one
/// rule per date and ascending iteration come for free
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTimeline {
    rules: BTreeMap<NaiveDate, InterestRule>,
}

impl RuleTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// insert or replace the rule at `date`; returns whether an existing rule
    /// was replaced
    pub fn set_rule(&mut self, date: NaiveDate, rule_id: &str, rate: Rate) -> Result<bool> {
        if !rate.in_annual_bounds() {
            return Err(LedgerError::InvalidRate { rate });
        }

        let rule = InterestRule {
            effective_date: date,
            rule_id: rule_id.to_string(),
            rate,
        };
        Ok(self.rules.insert(date, rule).is_some())
    }

    /// the rule governing `date`: latest effective date ≤ `date`
    pub fn rule_as_of(&self, date: NaiveDate) -> Option<&InterestRule> {
        self.rules.range(..=date).next_back().map(|(_, rule)| rule)
    }

    /// the rate governing `date`, if any rule is in effect
    pub fn rate_as_of(&self, date: NaiveDate) -> Option<Rate> {
        self.rule_as_of(date).map(|rule| rule.rate)
    }

    /// all rules, ascending by effective date; restartable
    pub fn rules(&self) -> impl Iterator<Item = &InterestRule> {
        self.rules.values()
    }

    /// rule effective dates in the half-open window `(after, through]`,
    /// ascending; these are the accrual breakpoints inside a range
    pub fn change_dates_within(&self, after: NaiveDate, through: NaiveDate) -> Vec<NaiveDate> {
        self.rules
            .range((Bound::Excluded(after), Bound::Included(through)))
            .map(|(date, _)| *date)
            .collect()
    }
}
