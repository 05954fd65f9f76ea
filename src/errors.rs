use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid amount: {amount} (must be positive with at most 2 decimal places)")]
    InvalidAmount { amount: Money },

    #[error("invalid transaction kind: {kind}")]
    InvalidKind { kind: char },

    #[error("first transaction for an account cannot be a withdrawal: {account_id}")]
    FirstTransactionMustBeDeposit { account_id: String },

    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: Money, requested: Money },

    #[error("invalid interest rate: {rate} (must be greater than 0 and less than 100)")]
    InvalidRate { rate: Rate },

    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: String },

    #[error("invalid month: {month}")]
    InvalidMonth { month: u32 },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
