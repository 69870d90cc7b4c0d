//! Frame arena: slotmap-backed tiling tree of frames.

pub mod node;
pub mod tree;

pub use node::{FrameData, FrameId, Orientation, SizingMode};
pub use tree::FrameTree;
