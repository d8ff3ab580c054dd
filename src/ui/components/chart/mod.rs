//! Grouped bar chart of metric averages per activity category.
//!
//! Rendering happens in two steps. [`ChartPlan::build`] turns the
//! aggregator's averages and the visibility switches into pixel geometry,
//! and [`BarChart`] paints that plan onto any RGB565 `DrawTarget`:
//!
//! - a light background with a border
//! - one horizontal gridline per scale step, labelled from the scale maximum
//!   down to 0
//! - a legend naming the three series above the plot area
//! - three gradient bars per visible category, each `average / scale_steps`
//!   of the plot height, drawn up from the baseline
//!
//! # Examples
//!
//! ```ignore
//! let mut chart = BarChart::new(config.chart);
//! chart.update(&aggregator, &Visibility::all(aggregator.len()));
//! chart.draw(&mut canvas)?;
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

mod bars;
mod component;
pub mod constants;
mod grid;
pub mod plan;
mod visibility;

pub use component::BarChart;
pub use plan::{Bar, BarGroup, ChartPlan, Gridline, LegendEntry, bar_height};
pub use visibility::Visibility;

/// Error types for chart operations
#[derive(Debug, Error)]
pub enum ChartError {
    /// Category is not one of the configured activity types
    #[error("Unknown category: {name}")]
    UnknownCategory {
        /// The category that was asked for
        name: String,
    },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
