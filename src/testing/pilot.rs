//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) in headless mode and provides
//! methods to simulate user input (clicks, touches, quitting, resize) and to
//! render the result as text for snapshot testing.

use crate::app::{App, AppConfig};
use crate::compositor::Compositor;
use crate::event::{InputEvent, PointerButton, PointerEvent};
use crate::frame::FrameTree;

use super::snapshot::dump_tree;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```
/// use touchtile::app::AppConfig;
/// use touchtile::testing::Pilot;
///
/// let mut pilot = Pilot::with_config(AppConfig::new().blank(true), 80, 24);
/// pilot.click(10, 10);
/// assert_eq!(pilot.tree().frame_count(), 3);
/// assert!(pilot.is_running());
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Create a headless app with the given size and default config.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(AppConfig::default(), width, height)
    }

    /// Create a headless app from `config`.
    pub fn with_config(config: AppConfig, width: u16, height: u16) -> Self {
        Self {
            app: App::new_headless(width, height, config),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press `button` at (x, y). Returns whether a repaint was requested.
    pub fn press(&mut self, x: i32, y: i32, button: PointerButton) -> bool {
        let redraw = self
            .app
            .handle_input(InputEvent::Pointer(PointerEvent::down(x, y, button)));
        if redraw {
            self.render();
        }
        redraw
    }

    /// Simulate a left-button click at (x, y).
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        self.press(x, y, PointerButton::Left)
    }

    /// Simulate a right-button click at (x, y).
    pub fn right_click(&mut self, x: i32, y: i32) -> bool {
        self.press(x, y, PointerButton::Right)
    }

    /// Simulate a finger touching (x, y).
    pub fn touch(&mut self, x: i32, y: i32, finger: u64) -> bool {
        let redraw = self
            .app
            .handle_input(InputEvent::Pointer(PointerEvent::touch(x, y, finger)));
        if redraw {
            self.render();
        }
        redraw
    }

    /// Simulate the quit key.
    pub fn quit(&mut self) {
        self.app.handle_input(InputEvent::Quit);
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.app.handle_input(InputEvent::Resize { width, height }) {
            self.render();
        }
    }

    /// Paint the current tree into the app's canvas.
    pub fn render(&mut self) {
        // Headless apps have no driver, so rendering cannot fail.
        if let Err(err) = self.app.render() {
            log::error!("headless render failed: {err}");
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn compositor(&self) -> &Compositor {
        self.app.compositor()
    }

    pub fn tree(&self) -> &FrameTree {
        self.app.compositor().tree()
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// The tree as text, see [`dump_tree`].
    pub fn dump(&self) -> String {
        dump_tree(self.tree())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
