//! Input event types, decoupled from crossterm.
//!
//! Defines [`InputEvent`] and [`PointerEvent`]. Crossterm events are converted
//! via [`InputEvent::from_crossterm`] so the rest of the crate never depends on
//! crossterm's event types directly.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

// ---------------------------------------------------------------------------
// PointerButton / PointerAction / PointerEvent
// ---------------------------------------------------------------------------

/// The button or finger behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// A finger on a touch surface.
    Touch,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    Down(PointerButton),
    Up(PointerButton),
    /// Movement, with or without a button held.
    Motion,
}

/// A pointer event in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: i32,
    pub y: i32,
    /// Identifies the pointer: 0 for the mouse, a finger id for touch.
    pub pointer: u64,
}

impl PointerEvent {
    /// A mouse button press at (x, y).
    pub fn down(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            action: PointerAction::Down(button),
            x,
            y,
            pointer: 0,
        }
    }

    /// A touch at (x, y) by finger `finger`.
    pub fn touch(x: i32, y: i32, finger: u64) -> Self {
        Self {
            action: PointerAction::Down(PointerButton::Touch),
            x,
            y,
            pointer: finger,
        }
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Resize { width: u16, height: u16 },
    /// Escape, `q`, or Ctrl+C.
    Quit,
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Returns `None` for events the demo does not react to (other keys,
    /// scrolling, focus changes, paste, key releases).
    pub fn from_crossterm(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => convert_key(key),
            Event::Mouse(mouse) => {
                let action = match mouse.kind {
                    MouseEventKind::Down(b) => PointerAction::Down(convert_mouse_button(b)),
                    MouseEventKind::Up(b) => PointerAction::Up(convert_mouse_button(b)),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerAction::Motion,
                    _ => return None,
                };
                Some(InputEvent::Pointer(PointerEvent {
                    action,
                    x: i32::from(mouse.column),
                    y: i32::from(mouse.row),
                    pointer: 0,
                }))
            }
            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }
}

fn convert_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        _ => None,
    }
}

fn convert_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
