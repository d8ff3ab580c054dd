//! Gradient bars, category labels and the legend

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::ui::styling::{ChartPalette, Gradient};

use super::constants::{AXIS_FONT, GRADIENT_BANDS, LEGEND_FONT};
use super::plan::{BarGroup, LegendEntry};

/// Fill `area` with the part of `gradient` that falls inside it.
///
/// The gradient runs from the bottom of `span` (bottom stop) to its top (top
/// stop) in [`GRADIENT_BANDS`] solid bands, so bars of equal height get
/// identical colors wherever they stand.
pub(super) fn fill_gradient<D: DrawTarget<Color = Rgb565>>(
    area: &Rectangle,
    span: &Rectangle,
    gradient: &Gradient,
    display: &mut D,
) -> Result<(), D::Error> {
    if area.is_zero_sized() || span.is_zero_sized() {
        return Ok(());
    }

    let height = span.size.height;
    let bands = GRADIENT_BANDS.min(height);
    let bottom = span.top_left.y + height as i32;

    for band in 0..bands {
        let band_bottom = bottom - (height * band / bands) as i32;
        let band_top = bottom - (height * (band + 1) / bands) as i32;
        let band_area = Rectangle::new(
            Point::new(area.top_left.x, band_top),
            Size::new(area.size.width, (band_bottom - band_top) as u32),
        );

        let visible = band_area.intersection(area);
        if visible.is_zero_sized() {
            continue;
        }

        let t = if bands > 1 {
            band as f32 / (bands - 1) as f32
        } else {
            1.0
        };
        display.fill_solid(&visible, gradient.at(t))?;
    }

    Ok(())
}

/// Draw one category: its name under the baseline, then its three bars.
pub(super) fn draw_group<D: DrawTarget<Color = Rgb565>>(
    group: &BarGroup,
    plot_area: &Rectangle,
    palette: &ChartPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    let label_style = MonoTextStyle::new(AXIS_FONT, palette.text);
    Text::new(group.category.as_str(), group.label_anchor, label_style).draw(display)?;

    for bar in &group.bars {
        fill_gradient(&bar.area, plot_area, &palette.gradient(bar.metric), display)?;
    }

    Ok(())
}

pub(super) fn draw_legend<D: DrawTarget<Color = Rgb565>>(
    legend: &[LegendEntry],
    palette: &ChartPalette,
    display: &mut D,
) -> Result<(), D::Error> {
    let label_style = MonoTextStyle::new(LEGEND_FONT, palette.text);

    for entry in legend {
        fill_gradient(
            &entry.swatch,
            &entry.swatch,
            &palette.gradient(entry.metric),
            display,
        )?;
        Text::new(entry.metric.label(), entry.label_anchor, label_style).draw(display)?;
    }

    Ok(())
}
