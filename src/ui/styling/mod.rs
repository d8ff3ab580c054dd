//! Colors and gradients used by the chart renderer

pub mod colors;

pub use colors::{
    CHART_BACKGROUND, CHART_STROKE, CHART_TEXT, ChartPalette, Gradient, lerp_color,
};
