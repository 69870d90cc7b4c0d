//! Headless testing helpers: Pilot, recording surface, snapshot dumps.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) without a real
//! terminal, [`RecordingSurface`] to inspect draw calls, and [`dump_tree`] to
//! capture a layout as text for snapshot-style assertions.

pub mod pilot;
pub mod recorder;
pub mod snapshot;

pub use pilot::Pilot;
pub use recorder::{DrawCommand, RecordingSurface};
pub use snapshot::{canvas_to_string, dump_tree};
