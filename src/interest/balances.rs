use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::ledger::Account;

/// end-of-day balances for every day of an inclusive date range
///
/// Total coverage is the contract: one entry per calendar day, no gaps, so the
/// accrual walk never has to fall back to a stale or default value.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBalances {
    start: NaiveDate,
    end: NaiveDate,
    balances: BTreeMap<NaiveDate, Money>,
}

impl DailyBalances {
    /// replay `account` over `[start, end]`, carrying balance forward across
    /// days with no activity
    pub fn build(account: &Account, start: NaiveDate, end: NaiveDate) -> Self {
        let mut balances = BTreeMap::new();
        let mut balance = account.balance_before(start);

        let mut day = start;
        while day <= end {
            if let Some(txns) = account.transactions_on(day) {
                if let Some(last) = txns.last() {
                    balance = last.resulting_balance;
                }
            }
            balances.insert(day, balance);
            day = day + chrono::Duration::days(1);
        }

        Self { start, end, balances }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// end-of-day balance, `Some` for every day inside the built range
    pub fn balance_on(&self, date: NaiveDate) -> Option<Money> {
        self.balances.get(&date).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Money)> + '_ {
        self.balances.iter().map(|(date, balance)| (*date, *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
