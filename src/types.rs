use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::LedgerError;

/// unique identifier for an account
pub type AccountId = String;

/// transaction id, date-compact plus per-date sequence (e.g. `20230626-01`)
pub type TransactionId = String;

/// transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnKind {
    Deposit,
    Withdrawal,
}

impl TxnKind {
    /// single-character form used by console shells
    pub fn as_char(&self) -> char {
        match self {
            TxnKind::Deposit => 'D',
            TxnKind::Withdrawal => 'W',
        }
    }
}

impl TryFrom<char> for TxnKind {
    type Error = LedgerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'D' => Ok(TxnKind::Deposit),
            'W' => Ok(TxnKind::Withdrawal),
            other => Err(LedgerError::InvalidKind { kind: other }),
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_char() {
        assert_eq!(TxnKind::try_from('D').unwrap(), TxnKind::Deposit);
        assert_eq!(TxnKind::try_from('w').unwrap(), TxnKind::Withdrawal);
        assert!(matches!(
            TxnKind::try_from('X'),
            Err(LedgerError::InvalidKind { kind: 'X' })
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TxnKind::Deposit.to_string(), "D");
        assert_eq!(TxnKind::Withdrawal.to_string(), "W");
    }
}
