use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AccountId, TransactionId, TxnKind};

/// all events that can be emitted by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    AccountOpened {
        account_id: AccountId,
        date: NaiveDate,
    },
    TransactionPosted {
        account_id: AccountId,
        txn_id: TransactionId,
        date: NaiveDate,
        kind: TxnKind,
        amount: Money,
        resulting_balance: Money,
    },
    InterestRuleSet {
        rule_id: String,
        effective_date: NaiveDate,
        rate: Rate,
        replaced: bool,
    },
    InterestAccrued {
        account_id: AccountId,
        period_start: NaiveDate,
        period_end: NaiveDate,
        amount: Money,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<LedgerEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_and_take() {
        let mut store = EventStore::new();
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();

        store.emit(LedgerEvent::AccountOpened {
            account_id: "AC001".to_string(),
            date,
        });

        assert_eq!(store.events().len(), 1);

        let drained = store.take_events();
        assert_eq!(drained.len(), 1);
        assert!(store.events().is_empty());
    }
}
