//! Input: pointer events, split bindings, listener dispatch.

pub mod binding;
pub mod input;
pub mod listener;

pub use binding::SplitBindings;
pub use input::{InputEvent, PointerAction, PointerButton, PointerEvent};
pub use listener::{FnListener, InputAdapter, PointerListener, PointerOutcome};
