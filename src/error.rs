//! Errors reported by the layout tree.

use crate::frame::FrameId;

/// Errors from hit-testing and mutating the frame tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    /// No leaf frame contains the point. Expected for input outside the
    /// window; callers drop the event.
    #[error("position ({x}, {y}) is outside every frame")]
    PositionOutsideTree { x: i32, y: i32 },
    /// A split was requested on a frame that already has children.
    #[error("frame {0:?} is not a leaf")]
    NotALeaf(FrameId),
    /// The id does not refer to a frame in this tree.
    #[error("frame {0:?} does not exist")]
    UnknownFrame(FrameId),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TilingError>;
