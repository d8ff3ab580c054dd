//! Chart geometry
//!
//! A [`ChartPlan`] is everything the bar chart will paint, in pixels, worked
//! out from the aggregator and the visibility switches without touching a
//! draw target.

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{trace, warn};

use crate::config::ChartLayout;
use crate::model::Metric;
use crate::stats::{Aggregator, round_to};

use super::constants::{
    CATEGORY_LABEL_OFFSET_PX, LEGEND_START_DENOMINATOR, LEGEND_START_NUMERATOR,
    LEGEND_SWATCH_RISE_PX, LEGEND_TEXT_ADVANCE_PX, LEGEND_TEXT_RISE_PX, Y_LABEL_OFFSET_PX,
};
use super::visibility::Visibility;

/// One horizontal scale line and its value label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gridline {
    pub start: Point,
    pub end: Point,
    /// Scale value printed next to the line
    pub value: u32,
    /// Baseline-left position of the value label
    pub label_anchor: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub metric: Metric,
    pub swatch: Rectangle,
    pub label_anchor: Point,
}

/// A single metric bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub metric: Metric,
    /// Average the height was derived from
    pub average: f64,
    /// Bar rectangle, bottom edge on the baseline. Zero height for a zero
    /// average.
    pub area: Rectangle,
}

/// The three bars of one visible category
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    /// Position in the configured activity types
    pub index: usize,
    pub category: String,
    pub label_anchor: Point,
    /// Energy, stress, happiness, left to right
    pub bars: [Bar; 3],
}

/// Full pixel layout of one chart frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub size: Size,
    /// Y of the zero line; bars grow upward from here
    pub baseline: i32,
    pub plot_area: Rectangle,
    /// Top to bottom, labelled from the scale maximum down to 0
    pub gridlines: Vec<Gridline>,
    pub legend: [LegendEntry; 3],
    /// Visible categories in configured order
    pub groups: Vec<BarGroup>,
}

impl ChartPlan {
    /// Background, gridlines and legend only.
    pub fn frame(layout: &ChartLayout) -> Self {
        let size = Size::new(layout.width, layout.height);
        let top = layout.top_buffer as i32;
        let plot_height = layout.plot_height();
        let baseline = top + plot_height as i32;
        let plot_area = Rectangle::new(
            Point::new(layout.gridline_start_x, top),
            Size::new(
                layout.width.saturating_sub(layout.gridline_start_x.max(0) as u32),
                plot_height,
            ),
        );

        let steps = layout.scale_steps.max(1);
        let gridlines = (0..=steps)
            .map(|step| {
                let y = top + (plot_height * step / steps) as i32;
                Gridline {
                    start: Point::new(layout.gridline_start_x, y),
                    end: Point::new(layout.width as i32 - 1, y),
                    value: steps - step,
                    label_anchor: Point::new(layout.y_label_x, y + Y_LABEL_OFFSET_PX),
                }
            })
            .collect();

        let swatch = layout.legend_swatch;
        let mut x = (layout.width * LEGEND_START_NUMERATOR / LEGEND_START_DENOMINATOR) as i32;
        let legend = Metric::ALL.map(|metric| {
            let entry_x = x;
            let text_x = entry_x + (swatch * 3 / 2) as i32;
            x = text_x + LEGEND_TEXT_ADVANCE_PX;
            LegendEntry {
                metric,
                swatch: Rectangle::new(
                    Point::new(entry_x, top - LEGEND_SWATCH_RISE_PX),
                    Size::new(swatch, swatch),
                ),
                label_anchor: Point::new(text_x, top - LEGEND_TEXT_RISE_PX),
            }
        });

        Self {
            size,
            baseline,
            plot_area,
            gridlines,
            legend,
            groups: Vec::new(),
        }
    }

    /// Lay out the chart for the aggregator's current averages.
    ///
    /// Hidden categories take no room: the groups after them move left.
    pub fn build(layout: &ChartLayout, aggregator: &Aggregator, visibility: &Visibility) -> Self {
        let mut plan = Self::frame(layout);
        let plot_height = layout.plot_height();
        let bar_width = layout.bar_width as i32;

        let mut x = (layout.y_axis_label_width + layout.section_gap / 4) as i32;
        for (index, (name, totals)) in aggregator.iter().enumerate() {
            if !visibility.is_visible(index) {
                continue;
            }

            let label_anchor = Point::new(x, plan.baseline + CATEGORY_LABEL_OFFSET_PX);
            let bars = Metric::ALL.map(|metric| {
                let average = totals.average(metric);
                let height = bar_height(average, layout.scale_steps, plot_height);
                let bar = Bar {
                    metric,
                    average,
                    area: Rectangle::new(
                        Point::new(x, plan.baseline - height as i32),
                        Size::new(layout.bar_width, height),
                    ),
                };
                x += bar_width
                    + if metric == Metric::Happiness {
                        layout.section_gap as i32
                    } else {
                        layout.bar_gap as i32
                    };
                bar
            });

            plan.groups.push(BarGroup {
                index,
                category: String::from(name),
                label_anchor,
                bars,
            });
        }

        if let Some(last) = plan.groups.last()
            && last.bars[2].area.top_left.x + bar_width > layout.width as i32
        {
            warn!(
                "{} visible categories overflow a {} px wide chart",
                plan.groups.len(),
                layout.width
            );
        }
        trace!("Planned chart with {} bar groups", plan.groups.len());
        plan
    }

    /// Group drawn for the category at `index`, if it is visible.
    pub fn group(&self, index: usize) -> Option<&BarGroup> {
        self.groups.iter().find(|group| group.index == index)
    }
}

/// Pixel height of a bar showing `average` on a `scale_steps` scale.
///
/// Never taller than the plot area.
pub fn bar_height(average: f64, scale_steps: u32, plot_height: u32) -> u32 {
    if scale_steps == 0 {
        return 0;
    }
    let exact = average / f64::from(scale_steps) * f64::from(plot_height);
    (round_to(exact, 0) as u32).min(plot_height)
}
