//! # touchtile
//!
//! A tiling layout of rectangular frames that splits under your finger.
//!
//! Frames form a tree. Each frame has a preferred width and height that are
//! either weights relative to its siblings or fixed pixel sizes, and an
//! orientation that decides whether its children sit side by side or stacked.
//! Pressing inside a leaf frame splits it in two; a marker is drawn on every
//! boundary between sibling frames.
//!
//! ## Core Systems
//!
//! - **[`frame`]**: slotmap-backed frame arena and tree operations
//! - **[`layout`]**: preferred sizes to pixel regions, hit testing, edge handles
//! - **[`split`]**: turning a leaf into two
//! - **[`compositor`]**: owns the tree, reacts to pointer input, paints
//! - **[`event`]**: pointer events, split bindings, listener dispatch
//! - **[`render`]**: drawing surface trait, in-memory canvas, crossterm driver
//! - **[`app`]**: configuration and the async event loop
//! - **[`testing`]**: headless pilot and snapshot helpers
//! - **[`geometry`]**, **[`color`]**, **[`error`]**: shared primitives
//!
//! ```
//! use touchtile::compositor::Compositor;
//! use touchtile::frame::Orientation;
//! use touchtile::geometry::{Region, Size};
//!
//! let mut compositor = Compositor::new(
//!     touchtile::frame::FrameTree::new(Size::new(640, 480)),
//!     touchtile::split::Splitter::default(),
//! );
//! let (_, left, right) = compositor.split_at(10, 10, Orientation::Vertical).unwrap();
//! assert_eq!(compositor.tree().region(left), Region::new(0, 0, 320, 480));
//! assert_eq!(compositor.tree().region(right), Region::new(320, 0, 320, 480));
//! ```

// Foundation
pub mod color;
pub mod error;
pub mod geometry;

// Core systems
pub mod frame;
pub mod layout;
pub mod split;

// Input and output
pub mod event;
pub mod render;

// Application
pub mod app;
pub mod compositor;

pub mod testing;

pub use error::{Result, TilingError};
