use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::types::{AccountId, TransactionId, TxnKind};

/// immutable record of a posted deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub kind: TxnKind,
    pub amount: Money,
    /// balance snapshot immediately after this transaction applied
    pub resulting_balance: Money,
}

/// a deposit account: current balance plus its full transaction history,
/// indexed by calendar day so date order is structural rather than re-sorted
/// on every read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    balance: Money,
    days: BTreeMap<NaiveDate, Vec<Transaction>>,
}

impl Account {
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            balance: Money::ZERO,
            days: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn has_history(&self) -> bool {
        !self.days.is_empty()
    }

    /// date of the earliest transaction on record
    pub fn first_transaction_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// append a posted transaction; within-day order is posting order
    pub(crate) fn post(&mut self, txn: Transaction) {
        self.balance = txn.resulting_balance;
        self.days.entry(txn.date).or_default().push(txn);
    }

    /// all transactions, date ascending, same-day ties in sequence order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.days.values().flatten()
    }

    /// transactions posted on a single day, in sequence order
    pub fn transactions_on(&self, date: NaiveDate) -> Option<&[Transaction]> {
        self.days.get(&date).map(|txns| txns.as_slice())
    }

    /// transactions within an inclusive date range
    pub fn transactions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Transaction> {
        self.days.range(start..=end).flat_map(|(_, txns)| txns)
    }

    /// balance carried into `date`: the resulting balance of the latest
    /// transaction strictly before it, or zero if none exists
    pub fn balance_before(&self, date: NaiveDate) -> Money {
        self.days
            .range(..date)
            .next_back()
            .and_then(|(_, txns)| txns.last())
            .map(|txn| txn.resulting_balance)
            .unwrap_or(Money::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: &str, d: NaiveDate, kind: TxnKind, amount: i64, balance: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: d,
            account_id: "AC001".to_string(),
            kind,
            amount: Money::from_major(amount),
            resulting_balance: Money::from_major(balance),
        }
    }

    #[test]
    fn test_transactions_ordered_by_date_then_sequence() {
        let mut account = Account::new("AC001");
        // posted out of date order
        account.post(txn("20230610-01", date(2023, 6, 10), TxnKind::Deposit, 50, 150));
        account.post(txn("20230601-01", date(2023, 6, 1), TxnKind::Deposit, 100, 100));
        account.post(txn("20230610-02", date(2023, 6, 10), TxnKind::Withdrawal, 20, 130));

        let ids: Vec<&str> = account.transactions().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["20230601-01", "20230610-01", "20230610-02"]);
    }

    #[test]
    fn test_balance_before() {
        let mut account = Account::new("AC001");
        account.post(txn("20230601-01", date(2023, 6, 1), TxnKind::Deposit, 100, 100));
        account.post(txn("20230615-01", date(2023, 6, 15), TxnKind::Deposit, 50, 150));

        assert_eq!(account.balance_before(date(2023, 6, 1)), Money::ZERO);
        assert_eq!(account.balance_before(date(2023, 6, 2)), Money::from_major(100));
        assert_eq!(account.balance_before(date(2023, 6, 15)), Money::from_major(100));
        assert_eq!(account.balance_before(date(2023, 7, 1)), Money::from_major(150));
    }

    #[test]
    fn test_first_transaction_date() {
        let mut account = Account::new("AC001");
        assert_eq!(account.first_transaction_date(), None);

        account.post(txn("20230615-01", date(2023, 6, 15), TxnKind::Deposit, 50, 50));
        account.post(txn("20230601-01", date(2023, 6, 1), TxnKind::Deposit, 100, 150));
        assert_eq!(account.first_transaction_date(), Some(date(2023, 6, 1)));
    }

    #[test]
    fn test_transactions_between() {
        let mut account = Account::new("AC001");
        account.post(txn("20230601-01", date(2023, 6, 1), TxnKind::Deposit, 100, 100));
        account.post(txn("20230626-01", date(2023, 6, 26), TxnKind::Withdrawal, 20, 80));
        account.post(txn("20230705-01", date(2023, 7, 5), TxnKind::Deposit, 10, 90));

        let june: Vec<&str> = account
            .transactions_between(date(2023, 6, 1), date(2023, 6, 30))
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(june, vec!["20230601-01", "20230626-01"]);
    }
}
