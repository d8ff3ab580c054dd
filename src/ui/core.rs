//! Core drawing trait

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Anything that paints itself onto an RGB565 target.
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Area this element covers
    fn bounds(&self) -> Rectangle;

    /// Whether the element changed since it was last drawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as drawn
    fn mark_clean(&mut self);

    /// Mark this element as needing a redraw
    fn mark_dirty(&mut self);
}
