//! Incremental statistics over the activity store

mod aggregator;

pub use aggregator::{Aggregator, CategoryTotals, round_to};
