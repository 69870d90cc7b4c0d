//! A surface that records draw calls instead of drawing.

use crate::color::Color;
use crate::geometry::{Offset, Region};
use crate::render::Surface;

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Region, Color),
    StrokeRect(Region, Color),
    Line(Offset, Offset, Color),
    Circle(Offset, i32, Color),
    Present,
}

/// Records every call in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded filled rectangles, in order.
    pub fn filled(&self) -> Vec<(Region, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect(region, color) => Some((region, color)),
                _ => None,
            })
            .collect()
    }

    /// Centers of recorded circles, in order.
    pub fn circles(&self) -> Vec<Offset> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Circle(center, _, _) => Some(center),
                _ => None,
            })
            .collect()
    }

    /// Number of completed frames.
    pub fn presents(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, region: Region, color: Color) {
        self.commands.push(DrawCommand::FillRect(region, color));
    }

    fn stroke_rect(&mut self, region: Region, color: Color) {
        self.commands.push(DrawCommand::StrokeRect(region, color));
    }

    fn draw_line(&mut self, from: Offset, to: Offset, color: Color) {
        self.commands.push(DrawCommand::Line(from, to, color));
    }

    fn draw_circle(&mut self, center: Offset, diameter: i32, color: Color) {
        self.commands.push(DrawCommand::Circle(center, diameter, color));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}
