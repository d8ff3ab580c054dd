//! Activity records and their id generator.

use core::cell::Cell;
use core::fmt;

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Unique, never-reused identifier of an [`ActivityRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source. The first id handed out is 1.
#[derive(Debug)]
pub struct RecordIds {
    next: Cell<u64>,
}

impl Default for RecordIds {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordIds {
    pub const fn new() -> Self {
        Self { next: Cell::new(1) }
    }

    pub fn next_id(&self) -> RecordId {
        let id = self.next.get();
        self.next.set(id + 1);
        RecordId(id)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

/// The three health ratings tracked per activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Energy,
    Stress,
    Happiness,
}

impl Metric {
    /// Metrics in series order (chart and legend order)
    pub const ALL: [Metric; 3] = [Metric::Energy, Metric::Stress, Metric::Happiness];

    pub const fn index(self) -> usize {
        match self {
            Self::Energy => 0,
            Self::Stress => 1,
            Self::Happiness => 2,
        }
    }

    /// Legend label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "Average energy",
            Self::Stress => "Average stress",
            Self::Happiness => "Average happiness",
        }
    }
}

/// Raw ratings as supplied by the input boundary.
///
/// Values are not range-checked here; the store gate does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub energy: u8,
    pub stress: u8,
    pub happiness: u8,
}

impl HealthMetrics {
    pub const fn new(energy: u8, stress: u8, happiness: u8) -> Self {
        Self {
            energy,
            stress,
            happiness,
        }
    }

    pub const fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Energy => self.energy,
            Metric::Stress => self.stress,
            Metric::Happiness => self.happiness,
        }
    }
}

/// One logged activity. Immutable once built; equality is by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: RecordId,
    category: String,
    metrics: HealthMetrics,
    duration_minutes: f64,
}

impl ActivityRecord {
    /// Build a record, drawing its id from `ids`.
    pub fn new(
        ids: &RecordIds,
        category: impl Into<String>,
        metrics: HealthMetrics,
        duration_minutes: f64,
    ) -> Self {
        Self {
            id: ids.next_id(),
            category: category.into(),
            metrics,
            duration_minutes,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }
}

impl PartialEq for ActivityRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActivityRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let ids = RecordIds::new();
        let a = ActivityRecord::new(&ids, "Coding", HealthMetrics::new(3, 2, 4), 30.0);
        let b = ActivityRecord::new(&ids, "Coding", HealthMetrics::new(3, 2, 4), 30.0);

        assert_eq!(a.id(), RecordId(1));
        assert_eq!(b.id(), RecordId(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_equality_is_by_id() {
        let ids = RecordIds::new();
        let a = ActivityRecord::new(&ids, "Eating", HealthMetrics::new(1, 2, 3), 10.0);
        let b = ActivityRecord::new(&ids, "Eating", HealthMetrics::new(1, 2, 3), 10.0);

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_metric_lookup() {
        let metrics = HealthMetrics::new(1, 4, 5);
        assert_eq!(metrics.get(Metric::Energy), 1);
        assert_eq!(metrics.get(Metric::Stress), 4);
        assert_eq!(metrics.get(Metric::Happiness), 5);
        assert_eq!(Metric::Happiness.index(), 2);
    }
}
