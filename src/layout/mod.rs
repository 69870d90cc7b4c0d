//! Layout engine, hit testing and edge-handle derivation over the frame tree.

pub mod engine;
pub mod handles;
pub mod hit;

pub use engine::{AbsolutePolicy, LayoutEngine, LayoutReport};
pub use handles::{derive_edge_handles, EdgeHandle, HandlePlacement};
pub use hit::locate;
