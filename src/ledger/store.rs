use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::config::LedgerConfig;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::ledger::account::{Account, Transaction};
use crate::types::{AccountId, TxnKind};

/// owns every account and validates/applies individual transactions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    config: LedgerConfig,
    accounts: HashMap<AccountId, Account>,
    /// next-sequence allocator, one counter per calendar date shared by all
    /// accounts, so same-day ids sort by posting order
    day_sequence: BTreeMap<NaiveDate, u32>,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            accounts: HashMap::new(),
            day_sequence: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn has_account(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }

    pub fn account(&self, account_id: &str) -> Result<&Account> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::AccountNotFound {
                account_id: account_id.to_string(),
            })
    }

    pub fn balance(&self, account_id: &str) -> Result<Money> {
        Ok(self.account(account_id)?.balance())
    }

    /// all transactions for an account, date ascending, ties by id
    pub fn transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self.account(account_id)?.transactions().cloned().collect())
    }

    /// validate and apply one deposit or withdrawal
    ///
    /// Every check runs before any state is touched, so a failed call leaves
    /// the balance, the history, and the id sequence exactly as they were.
    pub fn apply(
        &mut self,
        date: NaiveDate,
        account_id: &str,
        kind: TxnKind,
        amount: Money,
    ) -> Result<Transaction> {
        if !amount.is_positive() || !amount.has_currency_precision() {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let existing = self.accounts.get(account_id);
        if existing.is_none()
            && kind == TxnKind::Withdrawal
            && self.config.first_transaction_must_be_deposit
        {
            return Err(LedgerError::FirstTransactionMustBeDeposit {
                account_id: account_id.to_string(),
            });
        }

        let balance = existing.map(Account::balance).unwrap_or(Money::ZERO);
        if kind == TxnKind::Withdrawal && amount > balance {
            return Err(LedgerError::InsufficientBalance {
                available: balance,
                requested: amount,
            });
        }

        let sequence = self.day_sequence.entry(date).or_insert(0);
        *sequence += 1;
        let id = format!("{}-{:02}", date.format("%Y%m%d"), sequence);

        let resulting_balance = match kind {
            TxnKind::Deposit => balance + amount,
            TxnKind::Withdrawal => balance - amount,
        };

        let txn = Transaction {
            id,
            date,
            account_id: account_id.to_string(),
            kind,
            amount,
            resulting_balance,
        };

        self.accounts
            .entry(account_id.to_string())
            .or_insert_with(|| Account::new(account_id))
            .post(txn.clone());

        Ok(txn)
    }
}
