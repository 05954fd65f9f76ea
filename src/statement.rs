use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::{AccrualEngine, RuleTimeline};
use crate::ledger::{Account, Transaction};
use crate::types::{AccountId, TransactionId, TxnKind};

/// statement line kind: a posted transaction or the closing interest credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Deposit,
    Withdrawal,
    Interest,
}

impl LineKind {
    /// single-character form used in rendered tables
    pub fn as_char(&self) -> char {
        match self {
            LineKind::Deposit => 'D',
            LineKind::Withdrawal => 'W',
            LineKind::Interest => 'I',
        }
    }
}

impl From<TxnKind> for LineKind {
    fn from(kind: TxnKind) -> Self {
        match kind {
            TxnKind::Deposit => LineKind::Deposit,
            TxnKind::Withdrawal => LineKind::Withdrawal,
        }
    }
}

/// one row of a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub date: NaiveDate,
    /// absent on the interest line
    pub txn_id: Option<TransactionId>,
    pub kind: LineKind,
    pub amount: Money,
    pub balance: Money,
}

impl From<&Transaction> for StatementLine {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            txn_id: Some(txn.id.clone()),
            kind: txn.kind.into(),
            amount: txn.amount,
            balance: txn.resulting_balance,
        }
    }
}

/// statement for one calendar month, closed by an interest line on the last
/// day of the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatement {
    pub account_id: AccountId,
    pub year: i32,
    pub month: u32,
    pub lines: Vec<StatementLine>,
    pub interest: Money,
    pub closing_balance: Money,
}

impl MonthlyStatement {
    pub fn assemble(
        account: &Account,
        timeline: &RuleTimeline,
        engine: &AccrualEngine,
        year: i32,
        month: u32,
    ) -> Result<Self> {
        let (start, end) = month_bounds(year, month)?;

        let mut lines: Vec<StatementLine> = account
            .transactions_between(start, end)
            .map(StatementLine::from)
            .collect();

        let interest = engine.accrue(account, timeline, start, end).interest;

        // the interest line is always present, 0.00 when no rate applied
        let closing_balance = account.balance_before(end + chrono::Duration::days(1)) + interest;
        lines.push(StatementLine {
            date: end,
            txn_id: None,
            kind: LineKind::Interest,
            amount: interest,
            balance: closing_balance,
        });

        Ok(Self {
            account_id: account.id().to_string(),
            year,
            month,
            lines,
            interest,
            closing_balance,
        })
    }

    /// get json representation
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// full-history statement as of a given day; interest is reported as a total,
/// with no synthetic closing line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStatement {
    pub account_id: AccountId,
    pub as_of: NaiveDate,
    pub lines: Vec<StatementLine>,
    pub interest_earned: Money,
    pub final_balance: Money,
}

impl AccountStatement {
    pub fn assemble(
        account: &Account,
        timeline: &RuleTimeline,
        engine: &AccrualEngine,
        as_of: NaiveDate,
    ) -> Self {
        let lines: Vec<StatementLine> = account.transactions().map(StatementLine::from).collect();

        let interest_earned = match account.first_transaction_date() {
            Some(first) => engine.accrue(account, timeline, first, as_of).interest,
            None => Money::ZERO,
        };

        Self {
            account_id: account.id().to_string(),
            as_of,
            lines,
            interest_earned,
            final_balance: account.balance() + interest_earned,
        }
    }

    /// get json representation
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// first and last calendar day of a month
pub(crate) fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(LedgerError::InvalidMonth { month });
    }

    let start =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(LedgerError::InvalidMonth { month })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(LedgerError::InvalidMonth { month })?;

    Ok((start, next_month - chrono::Duration::days(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::decimal::Rate;
    use crate::ledger::Ledger;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    fn june_account() -> (Account, RuleTimeline) {
        let mut ledger = Ledger::new(LedgerConfig::default());
        ledger
            .apply(date(2023, 6, 1), "AC001", TxnKind::Deposit, money("100.00"))
            .unwrap();
        let mut timeline = RuleTimeline::new();
        timeline
            .set_rule(date(2023, 6, 1), "RULE01", Rate::from_percentage(dec!(1.95)))
            .unwrap();
        (ledger.account("AC001").unwrap().clone(), timeline)
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(2023, 6).unwrap(),
            (date(2023, 6, 1), date(2023, 6, 30))
        );
        assert_eq!(
            month_bounds(2023, 12).unwrap(),
            (date(2023, 12, 1), date(2023, 12, 31))
        );
        assert_eq!(
            month_bounds(2024, 2).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert!(matches!(
            month_bounds(2023, 0),
            Err(LedgerError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            month_bounds(2023, 13),
            Err(LedgerError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_monthly_statement_june_scenario() {
        let (account, timeline) = june_account();
        let statement = MonthlyStatement::assemble(
            &account,
            &timeline,
            &AccrualEngine::default(),
            2023,
            6,
        )
        .unwrap();

        assert_eq!(statement.lines.len(), 2);

        let deposit = &statement.lines[0];
        assert_eq!(deposit.kind, LineKind::Deposit);
        assert_eq!(deposit.txn_id.as_deref(), Some("20230601-01"));
        assert_eq!(deposit.amount, money("100.00"));
        assert_eq!(deposit.balance, money("100.00"));

        let interest = &statement.lines[1];
        assert_eq!(interest.kind, LineKind::Interest);
        assert_eq!(interest.date, date(2023, 6, 30));
        assert_eq!(interest.txn_id, None);
        assert_eq!(interest.amount, money("0.16"));
        assert_eq!(interest.balance, money("100.16"));

        assert_eq!(statement.closing_balance, money("100.16"));
    }

    #[test]
    fn test_interest_line_emitted_even_without_rules() {
        let (account, _) = june_account();
        let statement = MonthlyStatement::assemble(
            &account,
            &RuleTimeline::new(),
            &AccrualEngine::default(),
            2023,
            6,
        )
        .unwrap();

        let interest = statement.lines.last().unwrap();
        assert_eq!(interest.kind, LineKind::Interest);
        assert_eq!(interest.amount, Money::ZERO);
        assert_eq!(interest.balance, money("100.00"));
    }

    #[test]
    fn test_quiet_month_uses_carried_balance() {
        let (account, timeline) = june_account();
        // no july transactions; balance carries at 100.00
        let statement = MonthlyStatement::assemble(
            &account,
            &timeline,
            &AccrualEngine::default(),
            2023,
            7,
        )
        .unwrap();

        assert_eq!(statement.lines.len(), 1);
        // 100.00 × 1.95% × 31 / 365 = 0.16561 -> 0.17
        assert_eq!(statement.interest, money("0.17"));
        assert_eq!(statement.closing_balance, money("100.17"));
    }

    #[test]
    fn test_account_statement_as_of() {
        let (account, timeline) = june_account();
        let statement = AccountStatement::assemble(
            &account,
            &timeline,
            &AccrualEngine::default(),
            date(2023, 6, 30),
        );

        assert_eq!(statement.lines.len(), 1);
        assert_eq!(statement.interest_earned, money("0.16"));
        assert_eq!(statement.final_balance, money("100.16"));
    }

    #[test]
    fn test_json_round_trip() {
        let (account, timeline) = june_account();
        let statement = MonthlyStatement::assemble(
            &account,
            &timeline,
            &AccrualEngine::default(),
            2023,
            6,
        )
        .unwrap();

        let json = statement.to_json_pretty();
        let parsed: MonthlyStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, statement);
    }
}
