//! List of logged activities, newest first

use core::cell::RefCell;

use alloc::rc::Rc;
use alloc::vec::Vec;

use super::{View, watch_store};
use crate::model::{ActivityRecord, ActivityStore, RecordId, StoreEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub record: ActivityRecord,
    /// When the store accepted the record
    pub added_at_ms: u64,
}

/// One row per stored activity, keyed by record id.
#[derive(Debug, Default)]
pub struct DataList {
    rows: Vec<DataRow>,
}

impl DataList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(store: &ActivityStore) -> Rc<RefCell<Self>> {
        let list = Rc::new(RefCell::new(Self::new()));
        watch_store(&list, store);
        list
    }

    /// Newest first
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row(&self, id: RecordId) -> Option<&DataRow> {
        self.rows.iter().find(|row| row.record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl View for DataList {
    fn on_activity(&mut self, event: StoreEvent, at_ms: u64, record: &ActivityRecord) -> bool {
        match event {
            StoreEvent::Added => {
                self.rows.insert(
                    0,
                    DataRow {
                        record: record.clone(),
                        added_at_ms: at_ms,
                    },
                );
                true
            }
            StoreEvent::Removed => {
                let before = self.rows.len();
                self.rows.retain(|row| row.record != *record);
                self.rows.len() != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::model::HealthMetrics;

    #[test]
    fn test_rows_newest_first_and_removed_by_id() {
        let clock = Rc::new(ManualClock::new(10));
        let store = {
            let clock = Rc::clone(&clock);
            ActivityStore::new(move || clock.now_ms())
        };
        let list = DataList::attach(&store);

        let first = store.new_record("Studying", HealthMetrics::new(2, 5, 1), 90.0);
        let second = store.new_record("Exercising", HealthMetrics::new(5, 1, 5), 30.0);
        store.add(first.clone());
        clock.advance(10);
        store.add(second.clone());

        {
            let list = list.borrow();
            let ids: Vec<RecordId> = list.rows().iter().map(|row| row.record.id()).collect();
            assert_eq!(ids, [second.id(), first.id()]);
            let row = list.row(first.id()).unwrap();
            assert_eq!(row.added_at_ms, 10);
            assert_eq!(row.record.category(), "Studying");
            assert_eq!(row.record.metrics().stress, 5);
        }

        store.remove(&first);
        assert_eq!(list.borrow().len(), 1);
        assert!(list.borrow().row(first.id()).is_none());
        assert_eq!(list.borrow().row(second.id()).unwrap().added_at_ms, 20);
    }

    #[test]
    fn test_unknown_removal_changes_nothing() {
        let mut list = DataList::new();
        let store = ActivityStore::new(|| 0u64);
        let record = store.new_record("Coding", HealthMetrics::new(1, 1, 1), 1.0);
        assert!(!list.on_activity(StoreEvent::Removed, 0, &record));
        assert!(list.is_empty());
    }
}
