//! Frame records: FrameId, FrameData, sizing and split orientation.

use slotmap::new_key_type;

use crate::color::Color;
use crate::geometry::Region;

new_key_type! {
    /// Stable handle to a frame in a [`FrameTree`](super::FrameTree).
    ///
    /// Ids are generational: an id never aliases a different frame, even if
    /// the arena reuses the slot.
    pub struct FrameId;
}

/// How a frame's preferred dimensions are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SizingMode {
    /// Preferred dimensions are weights relative to the siblings.
    #[default]
    Ratio,
    /// Preferred dimensions are literal pixel counts.
    Absolute,
}

/// How a frame arranges its children.
///
/// The names follow the split line, not the stacking direction: a
/// `Vertical` split draws vertical boundaries, so children sit side by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children laid out left to right.
    #[default]
    Vertical,
    /// Children stacked top to bottom.
    Horizontal,
}

impl Orientation {
    /// Split a region into `(main_start, main_extent, cross_start, cross_extent)`
    /// where "main" is the axis children are laid out along.
    #[inline]
    pub const fn decompose(self, region: Region) -> (i32, i32, i32, i32) {
        match self {
            Orientation::Vertical => (region.x, region.width, region.y, region.height),
            Orientation::Horizontal => (region.y, region.height, region.x, region.width),
        }
    }

    /// Inverse of [`decompose`](Self::decompose).
    #[inline]
    pub const fn compose(
        self,
        main_start: i32,
        main_extent: i32,
        cross_start: i32,
        cross_extent: i32,
    ) -> Region {
        match self {
            Orientation::Vertical => {
                Region::new(main_start, cross_start, main_extent, cross_extent)
            }
            Orientation::Horizontal => {
                Region::new(cross_start, main_start, cross_extent, main_extent)
            }
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Data associated with a single frame.
///
/// Children and parent links live in the tree, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// How `preferred_width`/`preferred_height` are interpreted.
    pub sizing: SizingMode,
    /// Weight (ratio) or pixel width (absolute).
    pub preferred_width: f64,
    /// Weight (ratio) or pixel height (absolute).
    pub preferred_height: f64,
    /// How this frame's children are arranged.
    pub orientation: Orientation,
    /// Fill color used by the renderer.
    pub color: Color,
    /// Computed by the layout engine.
    pub(crate) region: Region,
}

impl FrameData {
    /// A ratio-sized frame with weight 1.0 on both axes.
    pub fn new() -> Self {
        Self {
            sizing: SizingMode::Ratio,
            preferred_width: 1.0,
            preferred_height: 1.0,
            orientation: Orientation::Vertical,
            color: Color::WHITE,
            region: Region::EMPTY,
        }
    }

    /// A ratio-sized frame with the given weights.
    pub fn ratio(width: f64, height: f64) -> Self {
        Self {
            preferred_width: width,
            preferred_height: height,
            ..Self::new()
        }
    }

    /// An absolute-sized frame with the given pixel dimensions.
    pub fn absolute(width: f64, height: f64) -> Self {
        Self {
            sizing: SizingMode::Absolute,
            preferred_width: width,
            preferred_height: height,
            ..Self::new()
        }
    }

    /// Set the fill color (builder).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the child orientation (builder).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The region computed by the last layout pass.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The preferred size along the axis a parent with `orientation` lays
    /// its children out on.
    pub fn preferred_along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.preferred_width,
            Orientation::Horizontal => self.preferred_height,
        }
    }

    /// The preferred size across that axis.
    pub fn preferred_across(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.preferred_height,
            Orientation::Horizontal => self.preferred_width,
        }
    }
}

impl Default for FrameData {
    fn default() -> Self {
        Self::new()
    }
}
