pub mod bank;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod statement;
pub mod types;

// re-export key types
pub use bank::Bank;
pub use config::LedgerConfig;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{EventStore, LedgerEvent};
pub use interest::{
    AccrualEngine, AccrualPeriod, AccrualResult, DailyBalances, InterestRule, RuleTimeline,
};
pub use ledger::{Account, Ledger, Transaction};
pub use statement::{AccountStatement, LineKind, MonthlyStatement, StatementLine};
pub use types::{AccountId, TransactionId, TxnKind};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
