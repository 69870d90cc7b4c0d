//! Core geometry types: Offset, Size, Region.
//!
//! All coordinates are whole pixels. On the terminal backend one cell is one
//! pixel, so the same types serve both the layout tree and the canvas.

use std::fmt;

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D point or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert to a [`Region`] positioned at the origin.
    #[inline]
    pub const fn to_region(self) -> Region {
        Region { x: 0, y: 0, width: self.width, height: self.height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
///
/// Regions are half-open: a region covers `x..x + width` horizontally and
/// `y..y + height` vertically. This is what makes sibling frames share an
/// edge without both claiming it during hit-testing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`, saturating at `i32::MAX`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge (exclusive): `y + height`, saturating at `i32::MAX`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the region covers no pixels.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` is entirely contained within this region.
    #[inline]
    pub const fn contains_region(self, other: Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    #[inline]
    pub const fn intersection(self, other: Region) -> Region {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        let w = x2.saturating_sub(x1);
        let h = y2.saturating_sub(y1);

        if w <= 0 || h <= 0 {
            Region::EMPTY
        } else {
            Region { x: x1, y: y1, width: w, height: h }
        }
    }

    /// A region of `size` centered on `center`.
    ///
    /// For even sizes the extra pixel goes to the right/bottom side.
    #[inline]
    pub const fn centered(center: Offset, size: Size) -> Region {
        Region {
            x: center.x.saturating_sub(size.width / 2),
            y: center.y.saturating_sub(size.height / 2),
            width: size.width,
            height: size.height,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
