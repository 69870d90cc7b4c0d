//! Which pointer button splits which way.
//!
//! [`SplitBindings`] maps a [`PointerButton`] to the [`Orientation`] of the
//! split it triggers. Buttons without a binding select a frame without
//! splitting it.

use std::collections::HashMap;

use super::input::PointerButton;
use crate::frame::Orientation;

/// Registry of pointer-button → split-orientation bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBindings {
    bindings: HashMap<PointerButton, Orientation>,
}

impl SplitBindings {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the default bindings.
    ///
    /// Defaults:
    /// - left button → `Horizontal` (stack top/bottom)
    /// - right button → `Vertical` (side by side)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(PointerButton::Left, Orientation::Horizontal);
        registry.bind(PointerButton::Right, Orientation::Vertical);
        registry
    }

    /// Bind a button, replacing any existing binding for it.
    pub fn bind(&mut self, button: PointerButton, orientation: Orientation) {
        self.bindings.insert(button, orientation);
    }

    /// Remove a binding, returning the orientation it had.
    pub fn unbind(&mut self, button: PointerButton) -> Option<Orientation> {
        self.bindings.remove(&button)
    }

    /// The split orientation for `button`, if it splits at all.
    pub fn resolve(&self, button: PointerButton) -> Option<Orientation> {
        self.bindings.get(&button).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for SplitBindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let registry = SplitBindings::new();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(PointerButton::Left), None);
    }

    #[test]
    fn defaults() {
        let registry = SplitBindings::with_defaults();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(PointerButton::Left), Some(Orientation::Horizontal));
        assert_eq!(registry.resolve(PointerButton::Right), Some(Orientation::Vertical));
        assert_eq!(registry.resolve(PointerButton::Middle), None);
        assert_eq!(registry.resolve(PointerButton::Touch), None);
    }

    #[test]
    fn bind_replaces() {
        let mut registry = SplitBindings::with_defaults();
        registry.bind(PointerButton::Left, Orientation::Vertical);
        assert_eq!(registry.resolve(PointerButton::Left), Some(Orientation::Vertical));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unbind() {
        let mut registry = SplitBindings::with_defaults();
        assert_eq!(registry.unbind(PointerButton::Right), Some(Orientation::Vertical));
        assert_eq!(registry.unbind(PointerButton::Right), None);
        assert_eq!(registry.resolve(PointerButton::Right), None);
    }

    #[test]
    fn touch_can_be_bound() {
        let mut registry = SplitBindings::new();
        registry.bind(PointerButton::Touch, Orientation::Vertical);
        assert_eq!(registry.resolve(PointerButton::Touch), Some(Orientation::Vertical));
    }
}
