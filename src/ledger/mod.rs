pub mod account;
pub mod store;

pub use account::{Account, Transaction};
pub use store::Ledger;
