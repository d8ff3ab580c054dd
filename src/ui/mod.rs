//! Drawing layer: a heap canvas, the chart palette and the bar chart.

pub mod canvas;
pub mod components;
pub mod core;
pub mod styling;

pub use canvas::Canvas;
pub use components::chart::{BarChart, ChartError, ChartPlan, Visibility};
pub use self::core::Drawable;
pub use styling::{ChartPalette, Gradient};
