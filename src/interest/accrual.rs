use chrono::NaiveDate;

use crate::decimal::Money;
use crate::interest::balances::DailyBalances;
use crate::interest::rules::RuleTimeline;
use crate::interest::{AccrualPeriod, AccrualResult};
use crate::ledger::Account;

/// engine for accruing tiered, time-weighted simple interest
///
/// The window is cut only at rate-change dates; each slice earns its start
/// day's end-of-day balance for its whole duration. Mid-slice transactions
/// move the balance of later slices, never the current one.
#[derive(Debug, Clone, Copy)]
pub struct AccrualEngine {
    rounding_dp: u32,
}

impl AccrualEngine {
    pub fn new(rounding_dp: u32) -> Self {
        Self { rounding_dp }
    }

    /// accrue over `[start, end]` inclusive
    pub fn accrue(
        &self,
        account: &Account,
        timeline: &RuleTimeline,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AccrualResult {
        // nothing to earn without history or without a rule in effect by `end`
        if !account.has_history() || timeline.rule_as_of(end).is_none() || end < start {
            return AccrualResult::zero();
        }

        let balances = DailyBalances::build(account, start, end);

        // rate-change dates inside the window, plus a synthetic breakpoint
        // one day past the end to close the final slice
        let mut breakpoints = timeline.change_dates_within(start, end);
        breakpoints.push(end + chrono::Duration::days(1));

        let mut cursor = start;
        let mut rate = timeline.rate_as_of(start);
        let mut total = Money::ZERO;
        let mut periods = Vec::new();

        for breakpoint in breakpoints {
            let days = (breakpoint - cursor).num_days();
            if days > 0 {
                if let (Some(rate), Some(balance)) = (rate, balances.balance_on(cursor)) {
                    let interest = balance.apply_rate(rate, days as u32);
                    total += interest;
                    periods.push(AccrualPeriod {
                        start: cursor,
                        end: breakpoint - chrono::Duration::days(1),
                        days: days as u32,
                        balance,
                        rate,
                        interest,
                    });
                }
            }
            cursor = breakpoint;
            rate = timeline.rate_as_of(breakpoint);
        }

        AccrualResult {
            interest: total.round_currency_dp(self.rounding_dp),
            periods,
        }
    }
}

impl Default for AccrualEngine {
    fn default() -> Self {
        Self::new(2)
    }
}
