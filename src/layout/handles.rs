//! Edge handles: markers on the boundary between adjacent sibling frames.
//!
//! Handles are derived fresh from the current regions on every call and hold
//! frame ids, not borrows, so a stale handle can be detected with
//! [`FrameTree::contains`].

use crate::frame::{FrameId, FrameTree, Orientation};
use crate::geometry::Offset;

/// Where along the shared boundary a handle sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HandlePlacement {
    /// Centered on the later sibling's extent across the split axis. Stays on
    /// the boundary even when siblings differ in cross-axis size.
    #[default]
    ChildMidpoint,
    /// Centered on the parent's midline across the split axis.
    ParentMidline,
}

/// A marker between two adjacent siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeHandle {
    /// The earlier sibling (left or top).
    pub first: FrameId,
    /// The later sibling (right or bottom).
    pub second: FrameId,
    pub x: i32,
    pub y: i32,
}

impl EdgeHandle {
    /// The handle's position.
    pub fn position(&self) -> Offset {
        Offset::new(self.x, self.y)
    }
}

/// Derive one handle per adjacent sibling pair, over the whole tree.
///
/// Order: the first child's nested handles, then for each later child the
/// boundary handle followed by that child's nested handles.
pub fn derive_edge_handles(tree: &FrameTree, placement: HandlePlacement) -> Vec<EdgeHandle> {
    let mut handles = Vec::new();
    collect(tree, tree.root(), placement, &mut handles);
    handles
}

fn collect(tree: &FrameTree, node: FrameId, placement: HandlePlacement, out: &mut Vec<EdgeHandle>) {
    let Some((&first, rest)) = tree.children(node).split_first() else {
        return;
    };
    collect(tree, first, placement, out);

    let mut previous = first;
    for &child in rest {
        out.push(handle_between(tree, node, previous, child, placement));
        collect(tree, child, placement, out);
        previous = child;
    }
}

fn handle_between(
    tree: &FrameTree,
    parent: FrameId,
    first: FrameId,
    second: FrameId,
    placement: HandlePlacement,
) -> EdgeHandle {
    let orientation = tree.get(parent).map(|p| p.orientation).unwrap_or_default();
    let across = match placement {
        HandlePlacement::ChildMidpoint => tree.region(second),
        HandlePlacement::ParentMidline => tree.region(parent),
    };
    let boundary = tree.region(second);

    let (x, y) = match orientation {
        Orientation::Vertical => (boundary.x, across.y.saturating_add(across.height / 2)),
        Orientation::Horizontal => (across.x.saturating_add(across.width / 2), boundary.y),
    };
    EdgeHandle { first, second, x, y }
}
