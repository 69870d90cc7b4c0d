//! In-memory pixel buffer.
//!
//! [`Canvas`] holds one [`Color`] per cell. It implements [`Surface`], so the
//! compositor paints into it without knowing about the terminal. The driver
//! then flushes the whole canvas, or only the cells returned by
//! [`Canvas::diff`].

use super::Surface;
use crate::color::Color;
use crate::geometry::{Offset, Region, Size};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between two canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A row-major grid of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Color>,
    width: u16,
    height: u16,
    presented: u64,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Color::BLACK; usize::from(width) * usize::from(height)],
            width,
            height,
            presented: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(i32::from(self.width), i32::from(self.height))
    }

    /// Number of completed frames.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Resize the canvas. All cells are reset to black.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Color::BLACK; usize::from(width) * usize::from(height)];
    }

    /// The color at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// One row of cells.
    pub fn row(&self, y: u16) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        Some(&self.cells[start..start + usize::from(self.width)])
    }

    /// Compare against `previous` and return the cells that differ.
    ///
    /// Cells outside `previous` count as changed.
    pub fn diff(&self, previous: &Canvas) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let (xi, yi) = (i32::from(x), i32::from(y));
                let color = self.get(xi, yi).unwrap_or(Color::BLACK);
                if previous.get(xi, yi) != Some(color) {
                    updates.push(CellUpdate { x, y, color });
                }
            }
        }
        updates
    }

    fn bounds(&self) -> Region {
        self.size().to_region()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        // Both coordinates are non-negative and in range after the bounds check.
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = color;
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn fill_rect(&mut self, region: Region, color: Color) {
        let clip = region.intersection(self.bounds());
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.plot(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, region: Region, color: Color) {
        if region.is_empty() {
            return;
        }
        let clip = region.intersection(self.bounds());
        if clip.is_empty() {
            return;
        }
        let (right, bottom) = (region.right() - 1, region.bottom() - 1);
        for x in clip.x..clip.right() {
            self.plot(x, region.y, color);
            self.plot(x, bottom, color);
        }
        for y in clip.y..clip.bottom() {
            self.plot(region.x, y, color);
            self.plot(right, y, color);
        }
    }

    fn draw_line(&mut self, from: Offset, to: Offset, color: Color) {
        // One pixel per step along the major axis, minor coordinate rounded
        // from the exact line. Only the steps inside the canvas are walked.
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        if dx == 0 && dy == 0 {
            self.plot(from.x, from.y, color);
            return;
        }
        let x_major = dx.abs() >= dy.abs();
        let (start, major, minor_start, minor) = if x_major {
            (from.x, dx, from.y, dy)
        } else {
            (from.y, dy, from.x, dx)
        };
        let limit = i64::from(if x_major { self.width } else { self.height });
        let (lo, hi) = if major > 0 {
            (i64::from(start), i64::from(start) + major)
        } else {
            (i64::from(start) + major, i64::from(start))
        };
        let (lo, hi) = (lo.max(0), hi.min(limit - 1));

        for m in lo..=hi {
            let t = i128::from(m - i64::from(start));
            let offset = round_div(t * i128::from(minor), i128::from(major));
            let n = i128::from(minor_start) + offset;
            let Ok(n) = i32::try_from(n) else { continue };
            // `m` is within the canvas, so it fits in an i32.
            let m = m as i32;
            if x_major {
                self.plot(m, n, color);
            } else {
                self.plot(n, m, color);
            }
        }
    }

    fn draw_circle(&mut self, center: Offset, diameter: i32, color: Color) {
        if diameter <= 0 {
            return;
        }
        let square = Region::centered(center, Size::new(diameter, diameter));
        let clip = square.intersection(self.bounds());
        let d = i64::from(diameter);
        let d2 = d * d;
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                // Cell centers measured in half-pixels from the circle's center.
                let px = 2 * (i64::from(x) - i64::from(square.x)) + 1 - d;
                let py = 2 * (i64::from(y) - i64::from(square.y)) + 1 - d;
                if px * px + py * py <= d2 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

/// `n / d` rounded to the nearest integer, halves rounded up.
fn round_div(n: i128, d: i128) -> i128 {
    let (n, d) = if d < 0 { (-n, -d) } else { (n, d) };
    (2 * n + d).div_euclid(2 * d)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);

    fn count(canvas: &Canvas, color: Color) -> usize {
        (0..canvas.height())
            .filter_map(|y| canvas.row(y))
            .flat_map(|row| row.iter())
            .filter(|&&c| c == color)
            .count()
    }

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.size(), Size::new(4, 3));
        assert_eq!(count(&canvas, Color::BLACK), 12);
        assert_eq!(canvas.presented(), 0);
    }

    #[test]
    fn get_out_of_bounds() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.get(4, 0), None);
        assert_eq!(canvas.get(0, 3), None);
        assert_eq!(canvas.get(-1, 0), None);
        assert!(canvas.row(3).is_none());
    }

    #[test]
    fn clear_fills_everything() {
        let mut canvas = Canvas::new(4, 3);
        canvas.clear(RED);
        assert_eq!(count(&canvas, RED), 12);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Region::new(2, 2, 10, 10), RED);
        assert_eq!(count(&canvas, RED), 4);
        assert_eq!(canvas.get(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.get(3, 3), Some(RED));
    }

    #[test]
    fn stroke_rect_draws_inner_border() {
        let mut canvas = Canvas::new(5, 5);
        canvas.stroke_rect(Region::new(0, 0, 5, 5), RED);
        assert_eq!(count(&canvas, RED), 16);
        assert_eq!(canvas.get(2, 2), Some(Color::BLACK));
        assert_eq!(canvas.get(4, 4), Some(RED));
    }

    #[test]
    fn stroke_empty_rect_draws_nothing() {
        let mut canvas = Canvas::new(5, 5);
        canvas.stroke_rect(Region::new(1, 1, 0, 3), RED);
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn diagonal_line_hits_every_step() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(Offset::new(0, 0), Offset::new(3, 3), RED);
        for i in 0..4 {
            assert_eq!(canvas.get(i, i), Some(RED));
        }
        assert_eq!(count(&canvas, RED), 4);
    }

    #[test]
    fn shallow_rising_line_is_continuous() {
        let mut canvas = Canvas::new(6, 4);
        canvas.draw_line(Offset::new(0, 3), Offset::new(5, 0), RED);
        assert_eq!(canvas.get(0, 3), Some(RED));
        assert_eq!(canvas.get(5, 0), Some(RED));
        // One pixel per column on a shallow line.
        assert_eq!(count(&canvas, RED), 6);
    }

    #[test]
    fn single_point_line() {
        let mut canvas = Canvas::new(3, 3);
        canvas.draw_line(Offset::new(1, 1), Offset::new(1, 1), RED);
        assert_eq!(count(&canvas, RED), 1);
    }

    #[test]
    fn small_circles_are_squares() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_circle(Offset::new(5, 5), 3, RED);
        assert_eq!(count(&canvas, RED), 9);
        assert_eq!(canvas.get(4, 4), Some(RED));
        assert_eq!(canvas.get(6, 6), Some(RED));
    }

    #[test]
    fn large_circle_skips_corners() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_circle(Offset::new(10, 10), 10, RED);
        assert_eq!(canvas.get(10, 10), Some(RED));
        assert_eq!(canvas.get(5, 5), Some(Color::BLACK));
        assert_eq!(canvas.get(5, 10), Some(RED));
    }

    #[test]
    fn zero_diameter_circle_draws_nothing() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_circle(Offset::new(2, 2), 0, RED);
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn anti_diagonal_matches_main_diagonal_shape() {
        let mut canvas = Canvas::new(4, 3);
        canvas.draw_line(Offset::new(0, 2), Offset::new(3, 0), RED);
        assert_eq!(canvas.get(0, 2), Some(RED));
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(2, 1), Some(RED));
        assert_eq!(canvas.get(3, 0), Some(RED));
        assert_eq!(count(&canvas, RED), 4);
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let mut canvas = Canvas::new(3, 6);
        canvas.draw_line(Offset::new(0, 0), Offset::new(2, 5), RED);
        assert_eq!(canvas.get(0, 0), Some(RED));
        assert_eq!(canvas.get(2, 5), Some(RED));
        assert_eq!(count(&canvas, RED), 6);
    }

    #[test]
    fn line_far_outside_is_clipped_to_visible_part() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(Offset::new(0, 0), Offset::new(i32::MAX, i32::MAX), RED);
        for i in 0..10 {
            assert_eq!(canvas.get(i, i), Some(RED));
        }
        assert_eq!(count(&canvas, RED), 10);

        canvas.clear(Color::BLACK);
        canvas.draw_line(Offset::new(-1_000_000_000, 5), Offset::new(1_000_000_000, 5), RED);
        assert_eq!(count(&canvas, RED), 10);
    }

    #[test]
    fn oversized_stroke_only_touches_visible_edges() {
        let mut canvas = Canvas::new(5, 5);
        canvas.stroke_rect(Region::new(0, 0, i32::MAX, i32::MAX), RED);
        // Only the top row and left column are on screen.
        assert_eq!(count(&canvas, RED), 9);
        assert_eq!(canvas.get(4, 0), Some(RED));
        assert_eq!(canvas.get(0, 4), Some(RED));
        assert_eq!(canvas.get(4, 4), Some(Color::BLACK));
    }

    #[test]
    fn huge_circle_covers_small_canvas() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_circle(Offset::new(5, 5), 20_000, RED);
        assert_eq!(count(&canvas, RED), 100);

        canvas.clear(Color::BLACK);
        canvas.draw_circle(Offset::new(5, 5), i32::MAX, RED);
        assert_eq!(count(&canvas, RED), 100);
    }

    #[test]
    fn present_counts_frames() {
        let mut canvas = Canvas::new(1, 1);
        canvas.present();
        canvas.present();
        assert_eq!(canvas.presented(), 2);
    }

    #[test]
    fn diff_reports_changed_cells() {
        let before = Canvas::new(3, 3);
        let mut after = before.clone();
        after.fill_rect(Region::new(1, 1, 1, 1), GREEN);

        assert_eq!(after.diff(&before), vec![CellUpdate { x: 1, y: 1, color: GREEN }]);
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn diff_against_smaller_canvas_includes_new_cells() {
        let before = Canvas::new(2, 1);
        let after = Canvas::new(3, 1);
        assert_eq!(
            after.diff(&before),
            vec![CellUpdate { x: 2, y: 0, color: Color::BLACK }]
        );
    }

    #[test]
    fn resize_resets() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(RED);
        canvas.resize(3, 1);
        assert_eq!(canvas.size(), Size::new(3, 1));
        assert_eq!(count(&canvas, Color::BLACK), 3);
    }
}
