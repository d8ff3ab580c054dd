//! The activity data store.
//!
//! Holds every accepted [`ActivityRecord`] in insertion order and tells its
//! listeners, synchronously and in registration order, about each addition
//! and removal.

use core::cell::RefCell;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

use super::listeners::{ListenerId, Listeners};
use super::record::{ActivityRecord, HealthMetrics, RecordIds};
use crate::clock::Clock;
use crate::validation::{ValidationError, validate_record};

/// What happened to the record carried by a store notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added,
    Removed,
}

/// Callback shape for store listeners: `(event, timestamp_ms, record)`.
pub type StoreListener = dyn FnMut(StoreEvent, u64, &ActivityRecord);

pub struct ActivityStore {
    records: RefCell<Vec<ActivityRecord>>,
    listeners: Listeners<StoreListener>,
    ids: RecordIds,
    clock: Box<dyn Clock>,
}

impl ActivityStore {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            listeners: Listeners::default(),
            ids: RecordIds::new(),
            clock: Box::new(clock),
        }
    }

    /// Build a record with an id from this store's own counter.
    ///
    /// The record is not added; pass it to [`add`](Self::add).
    pub fn new_record(
        &self,
        category: impl Into<String>,
        metrics: HealthMetrics,
        duration_minutes: f64,
    ) -> ActivityRecord {
        ActivityRecord::new(&self.ids, category, metrics, duration_minutes)
    }

    pub fn subscribe(
        &self,
        listener: impl FnMut(StoreEvent, u64, &ActivityRecord) + 'static,
    ) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Append `record` and notify listeners.
    ///
    /// Invalid records are dropped without mutation or notification.
    /// Returns whether the record was stored.
    pub fn add(&self, record: ActivityRecord) -> bool {
        self.try_add(record).is_ok()
    }

    /// Like [`add`](Self::add), but reports why a record was refused.
    pub fn try_add(&self, record: ActivityRecord) -> Result<(), ValidationError> {
        if let Err(err) = validate_record(&record) {
            warn!("Rejected activity {}: {}", record.id(), err);
            return Err(err);
        }

        self.records.borrow_mut().push(record.clone());

        let now = self.clock.now_ms();
        debug!(
            "Added activity {} ({}), notifying {} listeners",
            record.id(),
            record.category(),
            self.listeners.len()
        );
        self.listeners
            .broadcast(|listener| listener(StoreEvent::Added, now, &record));
        Ok(())
    }

    /// Remove the first stored record with the same id as `record`.
    ///
    /// Returns false, without notifying anyone, if it is not stored.
    pub fn remove(&self, record: &ActivityRecord) -> bool {
        let removed = {
            let mut records = self.records.borrow_mut();
            match records.iter().position(|stored| stored == record) {
                Some(index) => records.remove(index),
                None => {
                    debug!("Activity {} not in store, nothing removed", record.id());
                    return false;
                }
            }
        };

        let now = self.clock.now_ms();
        debug!("Removed activity {} ({})", removed.id(), removed.category());
        self.listeners
            .broadcast(|listener| listener(StoreEvent::Removed, now, &removed));
        true
    }

    /// Snapshot of the stored records in insertion order.
    pub fn records(&self) -> Vec<ActivityRecord> {
        self.records.borrow().clone()
    }

    /// Run `f` over the stored records without copying them.
    ///
    /// `f` must not add to or remove from this store.
    pub fn with_records<R>(&self, f: impl FnOnce(&[ActivityRecord]) -> R) -> R {
        f(&self.records.borrow())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn contains(&self, record: &ActivityRecord) -> bool {
        self.records.borrow().iter().any(|stored| stored == record)
    }
}
