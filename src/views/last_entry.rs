//! "Last data entry at" indicator

use core::cell::RefCell;

use alloc::rc::Rc;

use super::{View, watch_store};
use crate::model::{ActivityRecord, ActivityStore, StoreEvent};

/// Remembers when an activity was last added. Removals leave it alone.
#[derive(Debug, Default)]
pub struct LastEntry {
    last_added_ms: Option<u64>,
}

impl LastEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(store: &ActivityStore) -> Rc<RefCell<Self>> {
        let view = Rc::new(RefCell::new(Self::new()));
        watch_store(&view, store);
        view
    }

    /// Timestamp of the latest addition, `None` before the first one
    pub fn last_added_ms(&self) -> Option<u64> {
        self.last_added_ms
    }
}

impl View for LastEntry {
    fn on_activity(&mut self, event: StoreEvent, at_ms: u64, _record: &ActivityRecord) -> bool {
        match event {
            StoreEvent::Added => {
                self.last_added_ms = Some(at_ms);
                true
            }
            StoreEvent::Removed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::model::HealthMetrics;

    #[test]
    fn test_tracks_additions_only() {
        let clock = Rc::new(ManualClock::new(1_000));
        let store = {
            let clock = Rc::clone(&clock);
            ActivityStore::new(move || clock.now_ms())
        };
        let view = LastEntry::attach(&store);
        assert_eq!(view.borrow().last_added_ms(), None);

        let record = store.new_record("Eating", HealthMetrics::new(2, 2, 2), 20.0);
        store.add(record.clone());
        assert_eq!(view.borrow().last_added_ms(), Some(1_000));

        clock.advance(500);
        store.remove(&record);
        assert_eq!(view.borrow().last_added_ms(), Some(1_000));

        store.add(store.new_record("Gaming", HealthMetrics::new(1, 1, 1), 5.0));
        assert_eq!(view.borrow().last_added_ms(), Some(1_500));
    }
}
