//! Routing input events to a pointer listener.
//!
//! [`InputAdapter`] owns a [`PointerListener`] and feeds it [`InputEvent`]s,
//! tracking whether the application should keep running.

use super::input::{InputEvent, PointerAction, PointerEvent};
use crate::frame::FrameId;

// ---------------------------------------------------------------------------
// PointerOutcome
// ---------------------------------------------------------------------------

/// What a listener did with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed.
    Ignored,
    /// Nothing in the tree changed but the surface should be repainted.
    Redraw,
    /// `leaf` was split into `first` and `second`.
    Split {
        leaf: FrameId,
        first: FrameId,
        second: FrameId,
    },
    /// The listener refused the event.
    Rejected,
}

impl PointerOutcome {
    /// Whether the surface needs repainting.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, PointerOutcome::Redraw | PointerOutcome::Split { .. })
    }
}

// ---------------------------------------------------------------------------
// PointerListener
// ---------------------------------------------------------------------------

/// Receives pointer and resize events.
///
/// Every method has a default that ignores the event.
pub trait PointerListener {
    fn on_pointer_down(&mut self, _event: PointerEvent) -> PointerOutcome {
        PointerOutcome::Ignored
    }

    fn on_pointer_up(&mut self, _event: PointerEvent) -> PointerOutcome {
        PointerOutcome::Ignored
    }

    fn on_pointer_motion(&mut self, _event: PointerEvent) -> PointerOutcome {
        PointerOutcome::Ignored
    }

    /// The window changed size.
    fn on_resize(&mut self, _width: u16, _height: u16) -> PointerOutcome {
        PointerOutcome::Ignored
    }
}

/// Adapts a closure into a [`PointerListener`] that only handles presses.
pub struct FnListener<F>(pub F);

impl<F> PointerListener for FnListener<F>
where
    F: FnMut(PointerEvent) -> PointerOutcome,
{
    fn on_pointer_down(&mut self, event: PointerEvent) -> PointerOutcome {
        (self.0)(event)
    }
}

// ---------------------------------------------------------------------------
// InputAdapter
// ---------------------------------------------------------------------------

/// Dispatches [`InputEvent`]s to a listener.
#[derive(Debug)]
pub struct InputAdapter<L> {
    listener: L,
    running: bool,
}

impl<L: PointerListener> InputAdapter<L> {
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            running: true,
        }
    }

    /// Route one event. Returns `true` when the surface needs repainting.
    ///
    /// Once a quit event has been seen, further events are dropped.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if !self.running {
            return false;
        }
        let outcome = match event {
            InputEvent::Pointer(pointer) => match pointer.action {
                PointerAction::Down(_) => self.listener.on_pointer_down(pointer),
                PointerAction::Up(_) => self.listener.on_pointer_up(pointer),
                PointerAction::Motion => self.listener.on_pointer_motion(pointer),
            },
            InputEvent::Resize { width, height } => self.listener.on_resize(width, height),
            InputEvent::Quit => {
                log::debug!("quit requested");
                self.running = false;
                return false;
            }
        };
        outcome.needs_redraw()
    }

    /// Whether no quit event has been dispatched yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop dispatching.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the adapter and return its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }
}
