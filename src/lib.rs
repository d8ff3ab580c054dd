//! Activity tracker core.
//!
//! Users log activities (a category, energy/stress/happiness ratings from 1
//! to 5 and a duration) into an [`ActivityStore`]. Page and graph selection
//! live in small selection models. Everything else in the tracker is a view
//! that subscribes to those models and reacts synchronously to their
//! notifications:
//!
//! - [`TableSummary`](views::TableSummary): count and time per category
//! - [`BarGraph`](views::BarGraph): metric averages per category, painted
//!   onto an `embedded-graphics` canvas
//! - [`DataList`](views::DataList) and [`LastEntry`](views::LastEntry)
//!
//! The crate is `no_std` and needs `alloc`.

#![no_std]

extern crate alloc;

pub mod clock;
pub mod config;
pub mod model;
pub mod stats;
pub mod ui;
pub mod validation;
pub mod views;

pub use clock::{Clock, ManualClock};
pub use config::{ChartLayout, ConfigError, TrackerConfig};
pub use model::{
    ActivityRecord, ActivityStore, GraphKind, GraphModel, HealthMetrics, ListenerId, Metric,
    PageId, PageModel, RecordId, RecordIds, StoreEvent,
};
pub use stats::Aggregator;
pub use validation::ValidationError;
