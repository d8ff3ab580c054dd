//! Listener registry shared by every observable model.

use core::cell::{Cell, RefCell};

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Token returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Slot<F> = Rc<RefCell<Box<F>>>;

/// Ordered list of callbacks.
///
/// Dispatch walks a snapshot of the list, so a callback may subscribe or
/// unsubscribe while being notified; the change applies from the next
/// broadcast on.
pub(crate) struct Listeners<F: ?Sized> {
    next_id: Cell<u32>,
    entries: RefCell<Vec<(ListenerId, Slot<F>)>>,
}

impl<F: ?Sized> Default for Listeners<F> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<F: ?Sized> Listeners<F> {
    pub(crate) fn add(&self, listener: Box<F>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.entries
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Call `notify` once per listener, in registration order.
    pub(crate) fn broadcast(&self, mut notify: impl FnMut(&mut F)) {
        let snapshot: Vec<Slot<F>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();

        for slot in snapshot {
            let mut listener = slot.borrow_mut();
            notify(&mut **listener);
        }
    }
}
