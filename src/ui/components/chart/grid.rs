//! Scale gridlines and their value labels

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;

use super::constants::{AXIS_FONT, MAX_AXIS_LABEL_LENGTH};
use super::plan::Gridline;

pub(super) fn draw_gridlines<D: DrawTarget<Color = Rgb565>>(
    gridlines: &[Gridline],
    line_color: Rgb565,
    text_color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let line_style = PrimitiveStyle::with_stroke(line_color, 1);
    let label_style = MonoTextStyle::new(AXIS_FONT, text_color);

    for gridline in gridlines {
        Line::new(gridline.start, gridline.end)
            .into_styled(line_style)
            .draw(display)?;

        let label = format_value(gridline.value);
        Text::new(label.as_str(), gridline.label_anchor, label_style).draw(display)?;
    }

    Ok(())
}

fn format_value(value: u32) -> String<MAX_AXIS_LABEL_LENGTH> {
    let mut label = String::new();
    // u32 always fits in the label buffer
    let _ = write!(label, "{}", value);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5).as_str(), "5");
        assert_eq!(format_value(0).as_str(), "0");
        assert_eq!(format_value(u32::MAX).as_str(), "4294967295");
    }
}
