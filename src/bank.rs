use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::config::LedgerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::events::{EventStore, LedgerEvent};
use crate::interest::{AccrualEngine, AccrualResult, InterestRule, RuleTimeline};
use crate::ledger::{Ledger, Transaction};
use crate::statement::{AccountStatement, MonthlyStatement};
use crate::types::TxnKind;

/// single-branch bank: one ledger, one rate timeline, and the event stream
/// produced while operating them
#[derive(Debug, Default)]
pub struct Bank {
    ledger: Ledger,
    timeline: RuleTimeline,
    engine: AccrualEngine,
    events: EventStore,
}

impl Bank {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        let engine = AccrualEngine::new(config.interest_rounding_dp);
        Self {
            ledger: Ledger::new(config),
            timeline: RuleTimeline::new(),
            engine,
            events: EventStore::new(),
        }
    }

    /// validate and post one deposit or withdrawal
    pub fn process_transaction(
        &mut self,
        date: NaiveDate,
        account_id: &str,
        kind: TxnKind,
        amount: Money,
    ) -> Result<Transaction> {
        let is_new = !self.ledger.has_account(account_id);
        let txn = self.ledger.apply(date, account_id, kind, amount)?;

        if is_new {
            self.events.emit(LedgerEvent::AccountOpened {
                account_id: account_id.to_string(),
                date,
            });
        }
        self.events.emit(LedgerEvent::TransactionPosted {
            account_id: txn.account_id.clone(),
            txn_id: txn.id.clone(),
            date: txn.date,
            kind: txn.kind,
            amount: txn.amount,
            resulting_balance: txn.resulting_balance,
        });

        Ok(txn)
    }

    /// insert or replace the interest rule effective at `date`
    pub fn set_rule(&mut self, date: NaiveDate, rule_id: &str, rate: Rate) -> Result<()> {
        let replaced = self.timeline.set_rule(date, rule_id, rate)?;
        self.events.emit(LedgerEvent::InterestRuleSet {
            rule_id: rule_id.to_string(),
            effective_date: date,
            rate,
            replaced,
        });
        Ok(())
    }

    /// all rules, ascending by effective date
    pub fn rules(&self) -> impl Iterator<Item = &InterestRule> {
        self.timeline.rules()
    }

    /// an account's transactions, date ascending, ties by id
    pub fn transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.ledger.transactions(account_id)
    }

    /// an account's current balance
    pub fn balance(&self, account_id: &str) -> Result<Money> {
        self.ledger.balance(account_id)
    }

    /// accrue simple interest for an account over `[start, end]` inclusive
    pub fn accrue(
        &mut self,
        account_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AccrualResult> {
        let account = self.ledger.account(account_id)?;
        let result = self.engine.accrue(account, &self.timeline, start, end);

        self.events.emit(LedgerEvent::InterestAccrued {
            account_id: account_id.to_string(),
            period_start: start,
            period_end: end,
            amount: result.interest,
        });
        Ok(result)
    }

    /// statement for one calendar month, closed by an interest line on the
    /// month's last day
    pub fn monthly_statement(
        &mut self,
        account_id: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlyStatement> {
        let (start, end) = crate::statement::month_bounds(year, month)?;
        let account = self.ledger.account(account_id)?;
        let statement =
            MonthlyStatement::assemble(account, &self.timeline, &self.engine, year, month)?;

        self.events.emit(LedgerEvent::InterestAccrued {
            account_id: account_id.to_string(),
            period_start: start,
            period_end: end,
            amount: statement.interest,
        });
        Ok(statement)
    }

    /// full-history statement with interest accrued through today
    pub fn account_statement(
        &mut self,
        account_id: &str,
        time: &SafeTimeProvider,
    ) -> Result<AccountStatement> {
        let today = time.now().date_naive();
        let account = self.ledger.account(account_id)?;
        let statement = AccountStatement::assemble(account, &self.timeline, &self.engine, today);

        if let Some(first) = account.first_transaction_date() {
            self.events.emit(LedgerEvent::InterestAccrued {
                account_id: account_id.to_string(),
                period_start: first,
                period_end: today,
                amount: statement.interest_earned,
            });
        }
        Ok(statement)
    }

    /// drain the events collected since the last call
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        self.events.take_events()
    }

    /// events collected so far, without draining
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.events()
    }
}
