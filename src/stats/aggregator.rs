//! Per-category running totals.
//!
//! An [`Aggregator`] folds store events into counts and sums for every
//! configured activity type. Totals are updated incrementally, one event at
//! a time, and never recomputed from the store.

use core::cell::RefCell;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

use crate::config::TrackerConfig;
use crate::model::{ActivityRecord, ActivityStore, ListenerId, Metric, StoreEvent};

/// Round a non-negative value half-up to `places` decimals.
///
/// `no_std` has no `f64::round`, so this goes through an integer cast;
/// tiny negative drift from float subtraction clamps to zero. Values too
/// large for the cast have no fractional digits left and come back as is.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10u64.pow(places) as f64;
    let scaled = value * scale + 0.5;
    if scaled <= 0.0 {
        return 0.0;
    }
    if scaled >= u64::MAX as f64 {
        return value;
    }
    (scaled as u64) as f64 / scale
}

/// Running totals for one category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    count: u32,
    metric_sums: [u32; 3],
    duration_sum: f64,
}

impl CategoryTotals {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn metric_sum(&self, metric: Metric) -> u32 {
        self.metric_sums[metric.index()]
    }

    pub fn duration_sum(&self) -> f64 {
        self.duration_sum
    }

    /// Average rating, one decimal place.
    ///
    /// An empty category averages to 0 rather than NaN.
    pub fn average(&self, metric: Metric) -> f64 {
        let sum = f64::from(self.metric_sum(metric));
        round_to(sum / f64::from(self.count.max(1)), 1)
    }

    /// Average duration in minutes, two decimal places; 0 when empty.
    pub fn average_duration(&self) -> f64 {
        round_to(self.duration_sum / f64::from(self.count.max(1)), 2)
    }

    fn add(&mut self, record: &ActivityRecord) {
        self.count += 1;
        for metric in Metric::ALL {
            self.metric_sums[metric.index()] += u32::from(record.metrics().get(metric));
        }
        self.duration_sum += record.duration_minutes();
    }

    fn subtract(&mut self, record: &ActivityRecord) {
        assert!(
            self.count > 0,
            "removal of {} from an empty '{}' total: store notified a record it never added",
            record.id(),
            record.category()
        );
        let mut sums = self.metric_sums;
        for metric in Metric::ALL {
            let value = u32::from(record.metrics().get(metric));
            let Some(rest) = sums[metric.index()].checked_sub(value) else {
                panic!(
                    "removal of {} takes '{}' {:?} below zero: store notified a record it never added",
                    record.id(),
                    record.category(),
                    metric
                );
            };
            sums[metric.index()] = rest;
        }
        self.count -= 1;
        self.metric_sums = sums;
        self.duration_sum -= record.duration_minutes();
        if self.count == 0 {
            self.duration_sum = 0.0;
        }
    }
}

/// Running totals for every configured activity type.
#[derive(Debug, Clone)]
pub struct Aggregator {
    names: Vec<String>,
    totals: Vec<CategoryTotals>,
}

impl Aggregator {
    /// Start at zero for each of `activity_types`, kept in the given order.
    pub fn new<S: AsRef<str>>(activity_types: &[S]) -> Self {
        Self {
            names: activity_types
                .iter()
                .map(|name| String::from(name.as_ref()))
                .collect(),
            totals: alloc::vec![CategoryTotals::default(); activity_types.len()],
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(&config.activity_types)
    }

    /// Keep a shared aggregator in step with `store` from now on.
    ///
    /// Records already in the store are not counted, so attach before the
    /// first `add`.
    pub fn attach(self, store: &ActivityStore) -> (Rc<RefCell<Self>>, ListenerId) {
        let shared = Rc::new(RefCell::new(self));
        let sink = Rc::clone(&shared);
        let id = store.subscribe(move |event, _, record| {
            sink.borrow_mut().apply(event, record);
        });
        (shared, id)
    }

    /// Fold one store event into the totals.
    ///
    /// Returns the index of the category that changed, or `None` when the
    /// record's category is not configured.
    ///
    /// # Panics
    ///
    /// On a removal that would take a count below zero, which only happens
    /// if events are fed that the store never sent.
    pub fn apply(&mut self, event: StoreEvent, record: &ActivityRecord) -> Option<usize> {
        let Some(index) = self.index_of(record.category()) else {
            warn!(
                "Activity {} has unknown category '{}', not aggregated",
                record.id(),
                record.category()
            );
            return None;
        };

        let totals = &mut self.totals[index];
        match event {
            StoreEvent::Added => totals.add(record),
            StoreEvent::Removed => totals.subtract(record),
        }
        debug!(
            "{} now has {} entries",
            self.names[index], self.totals[index].count
        );
        Some(index)
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.names.iter().position(|name| name == category)
    }

    pub fn totals(&self, category: &str) -> Option<&CategoryTotals> {
        self.index_of(category).map(|index| &self.totals[index])
    }

    pub fn totals_at(&self, index: usize) -> Option<&CategoryTotals> {
        self.totals.get(index)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Categories and their totals, in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryTotals)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter())
    }
}
