//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer. One terminal cell is one pixel:
//! each cell is printed as a space over the pixel's background color. Mouse
//! capture is enabled while the driver is entered so clicks arrive as pointer
//! events.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use super::canvas::{Canvas, CellUpdate};
use crate::color::Color;

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// The driver does NOT enter the alternate screen on creation; call
/// [`Driver::enter`] explicitly and [`Driver::leave`] before exiting.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter the alternate screen, enable raw mode and mouse capture, hide the
    /// cursor and set the window title.
    pub fn enter(&mut self, title: Option<&str>) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        if let Some(title) = title {
            execute!(self.writer, SetTitle(title))?;
        }
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Undo everything [`Driver::enter`] did.
    pub fn leave(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Queue the whole canvas, one run of equal colors at a time.
    ///
    /// Call [`Driver::flush`] afterward to send it to the terminal.
    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        for y in 0..canvas.height() {
            let Some(row) = canvas.row(y) else { break };
            queue!(self.writer, cursor::MoveTo(0, y))?;
            for (color, len) in runs(row) {
                queue!(
                    self.writer,
                    SetBackgroundColor(color.into()),
                    Print(" ".repeat(len))
                )?;
            }
        }
        queue!(self.writer, ResetColor)?;
        Ok(())
    }

    /// Queue only the given cells.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(
                self.writer,
                cursor::MoveTo(update.x, update.y),
                SetBackgroundColor(update.color.into()),
                Print(' ')
            )?;
        }
        queue!(self.writer, ResetColor)?;
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

/// Collapse a row into `(color, run length)` pairs.
fn runs(row: &[Color]) -> Vec<(Color, usize)> {
    let mut out: Vec<(Color, usize)> = Vec::new();
    for &color in row {
        match out.last_mut() {
            Some((last, len)) if *last == color => *len += 1,
            _ => out.push((color, 1)),
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn color_converts_to_rgb() {
        let converted: style::Color = Color::new(1, 2, 3).into();
        assert_eq!(converted, style::Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn runs_collapse_equal_neighbours() {
        let row = [RED, RED, Color::BLACK, RED];
        assert_eq!(runs(&row), vec![(RED, 2), (Color::BLACK, 1), (RED, 1)]);
    }

    #[test]
    fn runs_of_empty_row() {
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn runs_cover_the_row() {
        let row = vec![Color::WHITE; 17];
        let total: usize = runs(&row).iter().map(|(_, len)| len).sum();
        assert_eq!(total, 17);
    }
}
