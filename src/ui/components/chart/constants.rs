//! Bar chart drawing constants
//!
//! Geometry that scales with the canvas lives in
//! [`ChartLayout`](crate::config::ChartLayout); these are the fixed offsets
//! around it.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13};

/// Maximum length of a formatted y-axis label, enough for any `u32`
pub const MAX_AXIS_LABEL_LENGTH: usize = 10;

/// Number of solid bands a gradient is approximated with
pub const GRADIENT_BANDS: u32 = 16;

/// Y-axis labels sit this far below their gridline's y
pub const Y_LABEL_OFFSET_PX: i32 = 5;

/// Category names sit this far below the baseline
pub const CATEGORY_LABEL_OFFSET_PX: i32 = 20;

/// Legend swatch top, measured up from the top of the plot area
pub const LEGEND_SWATCH_RISE_PX: i32 = 27;

/// Legend text baseline, measured up from the top of the plot area
pub const LEGEND_TEXT_RISE_PX: i32 = 15;

/// Room given to each legend label before the next swatch
pub const LEGEND_TEXT_ADVANCE_PX: i32 = 110;

/// Legend starts at `canvas width * NUMERATOR / DENOMINATOR`
pub const LEGEND_START_NUMERATOR: u32 = 2;
pub const LEGEND_START_DENOMINATOR: u32 = 7;

/// Font for axis values and category names
pub const AXIS_FONT: &MonoFont<'static> = &FONT_7X13;

/// Font for legend labels
pub const LEGEND_FONT: &MonoFont<'static> = &FONT_6X10;
