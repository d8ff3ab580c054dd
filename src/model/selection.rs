//! Single-choice selection with change notification.
//!
//! [`SelectionModel`] holds exactly one current value drawn from an
//! append-only set of available values. The page and graph models are thin
//! wrappers that give listeners their own callback shapes.

use core::cell::RefCell;

use alloc::boxed::Box;
use log::{debug, warn};
use thiserror_no_std::Error;

use super::listeners::{ListenerId, Listeners};
use crate::clock::Clock;

/// Reasons a selection change or registration is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("value is not one of the available values")]
    NotAvailable,

    #[error("value is already available")]
    AlreadyAvailable,

    #[error("available set is full (max: {max})")]
    Full { max: usize },
}

/// Callback shape for raw selection listeners: `(timestamp_ms, new_value)`.
pub type SelectionListener<T> = dyn FnMut(u64, &T);

/// Holds one selected value out of at most `N` available values.
pub struct SelectionModel<T: 'static, const N: usize> {
    current: RefCell<T>,
    available: RefCell<heapless::Vec<T, N>>,
    listeners: Listeners<SelectionListener<T>>,
    clock: Box<dyn Clock>,
}

impl<T, const N: usize> SelectionModel<T, N>
where
    T: Clone + PartialEq + core::fmt::Debug + 'static,
{
    /// Create a model whose only available value is `initial`.
    ///
    /// A zero-capacity model (`N == 0`) fails to compile.
    pub fn new(initial: T, clock: impl Clock + 'static) -> Self {
        const { assert!(N > 0, "a selection needs room for its current value") };
        let mut available = heapless::Vec::new();
        let pushed = available.push(initial.clone());
        debug_assert!(pushed.is_ok());
        Self {
            current: RefCell::new(initial),
            available: RefCell::new(available),
            listeners: Listeners::default(),
            clock: Box::new(clock),
        }
    }

    /// Create a model selecting `initial` out of `values`.
    ///
    /// `initial` is made available even if `values` does not list it.
    pub fn with_available(
        initial: T,
        values: impl IntoIterator<Item = T>,
        clock: impl Clock + 'static,
    ) -> Result<Self, SelectionError> {
        let model = Self::new(initial, clock);
        for value in values {
            match model.add_available(value) {
                Ok(()) | Err(SelectionError::AlreadyAvailable) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(model)
    }

    /// Append a value to the available set.
    pub fn add_available(&self, value: T) -> Result<(), SelectionError> {
        let mut available = self.available.borrow_mut();
        if available.contains(&value) {
            return Err(SelectionError::AlreadyAvailable);
        }
        available
            .push(value)
            .map_err(|_| SelectionError::Full { max: N })
    }

    pub fn subscribe(&self, listener: impl FnMut(u64, &T) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn current(&self) -> T {
        self.current.borrow().clone()
    }

    pub fn available(&self) -> heapless::Vec<T, N> {
        self.available.borrow().clone()
    }

    pub fn is_available(&self, value: &T) -> bool {
        self.available.borrow().contains(value)
    }

    /// Select `value` and notify listeners.
    ///
    /// Selecting the current value, or one that is not available, does
    /// nothing. Returns whether the selection changed.
    pub fn select(&self, value: T) -> bool {
        match self.try_select(value) {
            Ok(changed) => changed,
            Err(err) => {
                warn!("Selection ignored: {}", err);
                false
            }
        }
    }

    /// Like [`select`](Self::select), but reports unavailable values as errors.
    ///
    /// `Ok(false)` means `value` was already selected.
    pub fn try_select(&self, value: T) -> Result<bool, SelectionError> {
        if *self.current.borrow() == value {
            return Ok(false);
        }
        if !self.is_available(&value) {
            return Err(SelectionError::NotAvailable);
        }

        *self.current.borrow_mut() = value.clone();

        let now = self.clock.now_ms();
        debug!("Selected {:?}", value);
        self.listeners.broadcast(|listener| listener(now, &value));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    fn counter(model: &SelectionModel<u8, 4>) -> (ListenerId, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let id = model.subscribe(move |_, _| sink.set(sink.get() + 1));
        (id, count)
    }

    #[test]
    fn test_single_slot_model_keeps_current_available() {
        let model: SelectionModel<u8, 1> = SelectionModel::new(7, || 0u64);
        assert_eq!(model.current(), 7);
        assert!(model.is_available(&7));
        assert_eq!(model.available().as_slice(), &[7]);
        assert_eq!(model.add_available(8), Err(SelectionError::Full { max: 1 }));
    }

    #[test]
    fn test_select_current_is_noop() {
        let model: SelectionModel<u8, 4> =
            SelectionModel::with_available(1, [1, 2], || 0u64).unwrap();
        let (_, count) = counter(&model);

        assert!(!model.select(1));
        assert_eq!(count.get(), 0);
        assert_eq!(model.try_select(1), Ok(false));
    }

    #[test]
    fn test_select_unavailable_is_noop() {
        let model: SelectionModel<u8, 4> =
            SelectionModel::with_available(1, [1, 2], || 0u64).unwrap();
        let (_, count) = counter(&model);

        assert!(!model.select(3));
        assert_eq!(model.try_select(3), Err(SelectionError::NotAvailable));
        assert_eq!(model.current(), 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_select_new_value_notifies_each_listener_once() {
        let model: SelectionModel<u8, 4> =
            SelectionModel::with_available(1, [2], || 77u64).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            model.subscribe(move |at, value| seen.borrow_mut().push((at, *value)));
        }
        let (_, count) = counter(&model);

        assert!(model.select(2));
        assert_eq!(model.current(), 2);
        assert_eq!(*seen.borrow(), [(77, 2)]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_available_set_is_append_only_and_bounded() {
        let model: SelectionModel<u8, 2> = SelectionModel::new(1, || 0u64);
        assert_eq!(model.add_available(1), Err(SelectionError::AlreadyAvailable));
        assert_eq!(model.add_available(2), Ok(()));
        assert_eq!(model.add_available(3), Err(SelectionError::Full { max: 2 }));
        assert_eq!(model.available().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_unsubscribed_listener_is_silent() {
        let model: SelectionModel<u8, 4> =
            SelectionModel::with_available(1, [2], || 0u64).unwrap();
        let (first, first_count) = counter(&model);
        let (_, second_count) = counter(&model);

        model.select(2);
        assert!(model.unsubscribe(first));
        model.select(1);

        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 2);
    }
}
