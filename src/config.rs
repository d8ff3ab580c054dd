//! Tracker configuration.
//!
//! The set of activity types is closed once a [`TrackerConfig`] is built;
//! every aggregator and chart derives its rows from it. Configs travel as
//! postcard blobs between hosts.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::validation::RATING_MAX;

/// Maximum number of activity types a tracker can be configured with
pub const MAX_ACTIVITY_TYPES: usize = 8;

/// Activity types used when nothing else is configured
pub const DEFAULT_ACTIVITY_TYPES: [&str; 5] =
    ["Studying", "Eating", "Coding", "Exercising", "Gaming"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one activity type is required")]
    NoActivityTypes,

    #[error("activity type '{0}' is listed twice")]
    DuplicateActivityType(String),

    #[error("too many activity types (max: {max})")]
    TooManyActivityTypes { max: usize },

    #[error("canvas {width}x{height} leaves no plot area")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("chart scale has {steps} steps, ratings need {expected}")]
    ScaleMismatch { steps: u32, expected: u32 },

    #[error("config blob could not be decoded: {0}")]
    Decode(postcard::Error),

    #[error("config could not be encoded: {0}")]
    Encode(postcard::Error),
}

/// Pixel layout of the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Empty band above and below the plot area, in pixels
    pub top_buffer: u32,
    /// Width of each bar in pixels
    pub bar_width: u32,
    /// Gap between two bars of the same category
    pub bar_gap: u32,
    /// Gap between two categories
    pub section_gap: u32,
    /// Room reserved left of the first category for y-axis labels
    pub y_axis_label_width: u32,
    /// Number of steps on the rating scale; must equal [`RATING_MAX`]
    pub scale_steps: u32,
    /// Side length of a legend color swatch
    pub legend_swatch: u32,
    /// X where horizontal gridlines start
    pub gridline_start_x: i32,
    /// X of the y-axis labels
    pub y_label_x: i32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640,
            height: 320,
            top_buffer: 40,
            bar_width: 20,
            bar_gap: 5,
            section_gap: 40,
            y_axis_label_width: 50,
            scale_steps: 5,
            legend_swatch: 15,
            gridline_start_x: 30,
            y_label_x: 10,
        }
    }
}

impl ChartLayout {
    /// Height of the area bars may occupy
    pub fn plot_height(&self) -> u32 {
        self.height.saturating_sub(self.top_buffer * 2)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.plot_height() == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if i64::from(self.scale_steps) != RATING_MAX {
            return Err(ConfigError::ScaleMismatch {
                steps: self.scale_steps,
                expected: RATING_MAX as u32,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Category names, in display order
    pub activity_types: Vec<String>,
    pub chart: ChartLayout,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            activity_types: DEFAULT_ACTIVITY_TYPES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            chart: ChartLayout::default(),
        }
    }
}

impl TrackerConfig {
    /// Build a config with the given activity types and the default chart.
    pub fn with_activity_types<I, S>(types: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = Self {
            activity_types: types.into_iter().map(Into::into).collect(),
            chart: ChartLayout::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.activity_types.is_empty() {
            return Err(ConfigError::NoActivityTypes);
        }
        if self.activity_types.len() > MAX_ACTIVITY_TYPES {
            return Err(ConfigError::TooManyActivityTypes {
                max: MAX_ACTIVITY_TYPES,
            });
        }
        for (i, name) in self.activity_types.iter().enumerate() {
            if self.activity_types[..i].contains(name) {
                return Err(ConfigError::DuplicateActivityType(name.clone()));
            }
        }
        self.chart.validate()
    }

    /// Position of `category` in the configured order.
    pub fn activity_index(&self, category: &str) -> Option<usize> {
        self.activity_types.iter().position(|name| name == category)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    /// Decode and validate a config blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.activity_types.len(), 5);
        assert_eq!(config.activity_index("Coding"), Some(2));
        assert_eq!(config.activity_index("ABC"), None);
        assert_eq!(config.chart.plot_height(), 240);
    }

    #[test]
    fn test_rejects_bad_activity_sets() {
        assert!(matches!(
            TrackerConfig::with_activity_types(Vec::<String>::new()),
            Err(ConfigError::NoActivityTypes)
        ));
        assert!(matches!(
            TrackerConfig::with_activity_types(["Coding", "Gaming", "Coding"]),
            Err(ConfigError::DuplicateActivityType(name)) if name == "Coding"
        ));
        assert!(matches!(
            TrackerConfig::with_activity_types(["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
            Err(ConfigError::TooManyActivityTypes { max: 8 })
        ));
    }

    #[test]
    fn test_rejects_canvas_without_plot_area() {
        let mut config = TrackerConfig::default();
        config.chart.height = 80;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCanvas { height: 80, .. })
        ));
    }

    #[test]
    fn test_blob_decoding_validates() {
        let mut config = TrackerConfig::default();
        config.activity_types.push(String::from("Reading"));
        let bytes = config.to_bytes().unwrap();
        assert_eq!(TrackerConfig::from_bytes(&bytes).unwrap(), config);

        assert!(matches!(
            TrackerConfig::from_bytes(&[0xff, 0xff, 0xff]),
            Err(ConfigError::Decode(_))
        ));

        let mut invalid = TrackerConfig::default();
        invalid.chart.scale_steps = 0;
        let bytes = invalid.to_bytes().unwrap();
        assert!(matches!(
            TrackerConfig::from_bytes(&bytes),
            Err(ConfigError::ScaleMismatch { steps: 0, expected: 5 })
        ));
    }

    #[test]
    fn test_scale_must_match_rating_range() {
        let mut config = TrackerConfig::default();
        config.chart.scale_steps = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScaleMismatch { steps: 3, expected: 5 })
        ));

        config.chart.scale_steps = 10;
        let bytes = config.to_bytes().unwrap();
        assert!(matches!(
            TrackerConfig::from_bytes(&bytes),
            Err(ConfigError::ScaleMismatch { steps: 10, .. })
        ));
    }
}
