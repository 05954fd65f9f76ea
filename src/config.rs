use serde::{Deserialize, Serialize};

/// ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// reject a withdrawal as the opening transaction of a new account
    pub first_transaction_must_be_deposit: bool,
    /// fractional digits for rounded interest amounts
    pub interest_rounding_dp: u32,
}

impl LedgerConfig {
    /// permit a withdrawal to open an account; it still fails on balance,
    /// since a fresh account holds zero
    pub fn with_first_withdrawal_allowed(mut self) -> Self {
        self.first_transaction_must_be_deposit = false;
        self
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_transaction_must_be_deposit: true,
            interest_rounding_dp: 2,
        }
    }
}
