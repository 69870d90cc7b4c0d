//! Rendering: the drawing surface trait, an in-memory canvas, terminal driver.

pub mod canvas;
pub mod driver;

pub use canvas::{Canvas, CellUpdate};
pub use driver::Driver;

use crate::color::Color;
use crate::geometry::{Offset, Region};

/// The drawing operations the compositor needs.
///
/// Coordinates are pixels; implementations clip anything outside their bounds.
pub trait Surface {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, region: Region, color: Color);

    /// Draw the one-pixel border just inside `region`.
    fn stroke_rect(&mut self, region: Region, color: Color);

    /// Draw a line including both end points.
    fn draw_line(&mut self, from: Offset, to: Offset, color: Color);

    /// Draw a filled circle of `diameter` centered on `center`.
    fn draw_circle(&mut self, center: Offset, diameter: i32, color: Color);

    /// Mark the end of a frame.
    fn present(&mut self);
}
