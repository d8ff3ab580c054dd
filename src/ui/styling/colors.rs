//! Chart colors
//!
//! All colors are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::model::Metric;

/// Chart background, light gray
pub const CHART_BACKGROUND: Rgb565 = Rgb565::new(0xF7 >> 3, 0xF7 >> 2, 0xF7 >> 3);

/// Chart border and gridline color
pub const CHART_STROKE: Rgb565 = Rgb565::new(0xDA >> 3, 0xDA >> 2, 0xDA >> 3);

/// Label text color
pub const CHART_TEXT: Rgb565 = Rgb565::BLACK;

pub const ENERGY_BOTTOM: Rgb565 = Rgb565::new(216 >> 3, 104 >> 2, 0);
pub const ENERGY_TOP: Rgb565 = Rgb565::new(255 >> 3, 179 >> 2, 109 >> 3);

pub const STRESS_BOTTOM: Rgb565 = Rgb565::new(201 >> 3, 201 >> 2, 0);
pub const STRESS_TOP: Rgb565 = Rgb565::new(247 >> 3, 247 >> 2, 86 >> 3);

pub const HAPPINESS_BOTTOM: Rgb565 = Rgb565::new(0, 147 >> 2, 0);
pub const HAPPINESS_TOP: Rgb565 = Rgb565::new(119 >> 3, 255 >> 2, 119 >> 3);

/// Vertical two-stop gradient, bottom color first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub bottom: Rgb565,
    pub top: Rgb565,
}

impl Gradient {
    pub const fn new(bottom: Rgb565, top: Rgb565) -> Self {
        Self { bottom, top }
    }

    /// Fill used for one of the metric series.
    pub const fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Energy => Self::new(ENERGY_BOTTOM, ENERGY_TOP),
            Metric::Stress => Self::new(STRESS_BOTTOM, STRESS_TOP),
            Metric::Happiness => Self::new(HAPPINESS_BOTTOM, HAPPINESS_TOP),
        }
    }

    /// Color at `t`, where 0.0 is the bottom stop and 1.0 the top.
    pub fn at(&self, t: f32) -> Rgb565 {
        lerp_color(self.bottom, self.top, t)
    }
}

/// Colors a bar chart is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub background: Rgb565,
    pub stroke: Rgb565,
    pub text: Rgb565,
    /// Indexed by [`Metric::index`]
    pub series: [Gradient; 3],
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: CHART_BACKGROUND,
            stroke: CHART_STROKE,
            text: CHART_TEXT,
            series: Metric::ALL.map(Gradient::for_metric),
        }
    }
}

impl ChartPalette {
    pub fn gradient(&self, metric: Metric) -> Gradient {
        self.series[metric.index()]
    }
}

pub fn lerp_color(start: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = rgb565_to_rgb888(start);
    let (r1, g1, b1) = rgb565_to_rgb888(end);

    let r = r0 as f32 + (r1 as f32 - r0 as f32) * t;
    let g = g0 as f32 + (g1 as f32 - g0 as f32) * t;
    let b = b0 as f32 + (b1 as f32 - b0 as f32) * t;

    rgb888_to_rgb565(r as u8, g as u8, b as u8)
}

fn rgb565_to_rgb888(color: Rgb565) -> (u8, u8, u8) {
    let r8 = (color.r() << 3) | (color.r() >> 2);
    let g8 = (color.g() << 2) | (color.g() >> 4);
    let b8 = (color.b() << 3) | (color.b() >> 2);
    (r8, g8, b8)
}

fn rgb888_to_rgb565(r8: u8, g8: u8, b8: u8) -> Rgb565 {
    Rgb565::new(r8 >> 3, g8 >> 2, b8 >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let energy = Gradient::for_metric(Metric::Energy);
        assert_eq!(energy.at(0.0), ENERGY_BOTTOM);
        assert_eq!(energy.at(1.0), ENERGY_TOP);
        assert_eq!(energy.at(-3.0), ENERGY_BOTTOM);
        assert_eq!(energy.at(7.0), ENERGY_TOP);
    }

    #[test]
    fn test_lerp_midpoint_lies_between_stops() {
        let mid = lerp_color(Rgb565::BLACK, Rgb565::WHITE, 0.5);
        assert!(mid.r() > 0 && mid.r() < 31);
        assert!(mid.g() > 0 && mid.g() < 63);
    }

    #[test]
    fn test_palette_series_order() {
        let palette = ChartPalette::default();
        assert_eq!(palette.gradient(Metric::Stress).bottom, STRESS_BOTTOM);
        assert_eq!(palette.gradient(Metric::Happiness).top, HAPPINESS_TOP);
    }
}
