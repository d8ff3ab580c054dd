//! Bar chart component with Drawable trait implementation

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};

use crate::config::ChartLayout;
use crate::stats::Aggregator;
use crate::ui::core::Drawable;
use crate::ui::styling::ChartPalette;

use super::bars::{draw_group, draw_legend};
use super::grid::draw_gridlines;
use super::plan::ChartPlan;
use super::visibility::Visibility;

/// Grouped bar chart of per-category metric averages.
///
/// [`update`](Self::update) recomputes the layout; drawing always repaints
/// the whole chart area from that layout.
pub struct BarChart {
    layout: ChartLayout,
    palette: ChartPalette,
    plan: ChartPlan,
    dirty: bool,
}

impl BarChart {
    /// Chart showing only its frame until the first update.
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            palette: ChartPalette::default(),
            plan: ChartPlan::frame(&layout),
            dirty: true,
        }
    }

    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Layout the chart would have for this data, without keeping it.
    pub fn plan(&self, aggregator: &Aggregator, visibility: &Visibility) -> ChartPlan {
        ChartPlan::build(&self.layout, aggregator, visibility)
    }

    /// Adopt the layout for this data and mark the chart for redraw.
    pub fn update(&mut self, aggregator: &Aggregator, visibility: &Visibility) {
        self.plan = self.plan(aggregator, visibility);
        self.dirty = true;
    }

    /// Layout the next draw will paint
    pub fn current_plan(&self) -> &ChartPlan {
        &self.plan
    }

    fn draw_background<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(self.palette.background)
            .stroke_color(self.palette.stroke)
            .stroke_width(1)
            .build();
        self.bounds().into_styled(style).draw(display)
    }
}

impl Drawable for BarChart {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // background -> gridlines -> legend -> bars
        self.draw_background(display)?;
        draw_gridlines(
            &self.plan.gridlines,
            self.palette.stroke,
            self.palette.text,
            display,
        )?;
        draw_legend(&self.plan.legend, &self.palette, display)?;
        for group in &self.plan.groups {
            draw_group(group, &self.plan.plot_area, &self.palette, display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.plan.size)
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
