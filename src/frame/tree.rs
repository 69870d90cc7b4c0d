//! The frame tree: arena storage, parent/child links, walks.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{FrameData, FrameId, SizingMode};
use crate::error::{Result, TilingError};
use crate::geometry::{Region, Size};

/// Empty slice constant for returning when a frame has no children.
const NO_CHILDREN: &[FrameId] = &[];

/// A tree of frames backed by a slotmap arena.
///
/// The tree always has a root, created with absolute sizing so that its
/// region is the full window. Each frame is owned by exactly one parent: the
/// only way to add a frame is [`insert_child`](Self::insert_child), and there
/// is no way to attach an existing frame elsewhere. The parent link is a plain
/// back-reference used for walks, not ownership.
#[derive(Debug, Clone)]
pub struct FrameTree {
    nodes: SlotMap<FrameId, FrameData>,
    children: SecondaryMap<FrameId, Vec<FrameId>>,
    parent: SecondaryMap<FrameId, FrameId>,
    root: FrameId,
}

impl FrameTree {
    /// Create a tree whose root covers `size` pixels from the origin.
    pub fn new(size: Size) -> Self {
        Self::with_root(FrameData::absolute(f64::from(size.width), f64::from(size.height)))
    }

    /// Create a tree from explicit root data.
    ///
    /// The root is forced to absolute sizing; its region starts at the origin
    /// and takes the preferred dimensions as pixels.
    pub fn with_root(mut data: FrameData) -> Self {
        data.sizing = SizingMode::Absolute;
        data.region = Region::new(
            0,
            0,
            pixels(data.preferred_width),
            pixels(data.preferred_height),
        );
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(data);
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
        }
    }

    /// The root frame.
    pub fn root(&self) -> FrameId {
        self.root
    }

    /// Change the root's pixel size. Call the layout engine afterwards.
    pub fn resize_root(&mut self, size: Size) {
        let root = &mut self.nodes[self.root];
        root.preferred_width = f64::from(size.width);
        root.preferred_height = f64::from(size.height);
        root.region = Region::new(0, 0, size.width, size.height);
    }

    /// Append a new frame as the last child of `parent`.
    ///
    /// The new frame has an empty region until the next layout pass.
    pub fn insert_child(&mut self, parent: FrameId, data: FrameData) -> Result<FrameId> {
        if !self.nodes.contains_key(parent) {
            return Err(TilingError::UnknownFrame(parent));
        }
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        Ok(id)
    }

    /// Get the children of a frame, in layout order. Returns an empty slice
    /// for leaves and unknown ids.
    pub fn children(&self, id: FrameId) -> &[FrameId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(NO_CHILDREN)
    }

    /// Get the parent of a frame, if it has one.
    pub fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.parent.get(id).copied()
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: FrameId) -> Vec<FrameId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether the frame exists and has no children.
    pub fn is_leaf(&self, id: FrameId) -> bool {
        self.nodes.contains_key(id) && self.children(id).is_empty()
    }

    /// Immutable access to a frame's data.
    pub fn get(&self, id: FrameId) -> Option<&FrameData> {
        self.nodes.get(id)
    }

    /// Mutable access to a frame's data.
    ///
    /// The computed region is not reachable through this handle; it is
    /// owned by the layout engine.
    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut FrameData> {
        self.nodes.get_mut(id)
    }

    /// The computed region of a frame, or [`Region::EMPTY`] for unknown ids.
    pub fn region(&self, id: FrameId) -> Region {
        self.nodes.get(id).map(FrameData::region).unwrap_or(Region::EMPTY)
    }

    pub(crate) fn set_region(&mut self, id: FrameId, region: Region) {
        if let Some(frame) = self.nodes.get_mut(id) {
            frame.region = region;
        }
    }

    /// Number of frames, including the root.
    pub fn frame_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree contains a frame with the given id.
    pub fn contains(&self, id: FrameId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: FrameId) -> Vec<FrameId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// All leaves in visual order (depth-first, first child first).
    pub fn leaves(&self) -> Vec<FrameId> {
        self.walk_depth_first(self.root)
            .into_iter()
            .filter(|&id| self.children(id).is_empty())
            .collect()
    }
}

/// Round a preferred dimension to whole pixels. Non-finite and negative
/// values collapse to zero.
pub(crate) fn pixels(value: f64) -> i32 {
    if value.is_finite() && value > 0.0 {
        value.round() as i32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Orientation;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (FrameTree, FrameId, FrameId, FrameId, FrameId, FrameId) {
        let mut tree = FrameTree::new(Size::new(100, 50));
        let root = tree.root();
        let a = tree.insert_child(root, FrameData::new()).unwrap();
        let b = tree.insert_child(root, FrameData::new()).unwrap();
        let c = tree.insert_child(a, FrameData::new()).unwrap();
        let d = tree.insert_child(a, FrameData::new()).unwrap();
        (tree, root, a, b, c, d)
    }

    #[test]
    fn new_root_is_absolute_full_window() {
        let tree = FrameTree::new(Size::new(640, 480));
        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.sizing, SizingMode::Absolute);
        assert_eq!(root.region(), Region::new(0, 0, 640, 480));
        assert!(tree.is_leaf(tree.root()));
        assert_eq!(tree.frame_count(), 1);
    }

    #[test]
    fn with_root_forces_absolute() {
        let tree = FrameTree::with_root(
            FrameData::ratio(320.4, 200.6).with_orientation(Orientation::Horizontal),
        );
        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.sizing, SizingMode::Absolute);
        assert_eq!(root.orientation, Orientation::Horizontal);
        assert_eq!(root.region(), Region::new(0, 0, 320, 201));
    }

    #[test]
    fn resize_root_updates_region() {
        let mut tree = FrameTree::new(Size::new(640, 480));
        tree.resize_root(Size::new(80, 24));
        assert_eq!(tree.region(tree.root()), Region::new(0, 0, 80, 24));
        assert_eq!(tree.get(tree.root()).unwrap().preferred_width, 80.0);
    }

    #[test]
    fn insert_child_parent_relationship() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn children_keep_insertion_order() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn insert_child_into_unknown_parent_fails() {
        let (mut tree, root, ..) = build_tree();
        let mut other = FrameTree::new(Size::new(1, 1));
        let foreign = other.insert_child(other.root(), FrameData::new()).unwrap();
        assert_eq!(
            tree.insert_child(foreign, FrameData::new()),
            Err(TilingError::UnknownFrame(foreign))
        );
        assert_eq!(tree.children(root).len(), 2);
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert_eq!(tree.ancestors(a), vec![root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn is_leaf() {
        let (tree, root, a, b, c, _d) = build_tree();
        assert!(!tree.is_leaf(root));
        assert!(!tree.is_leaf(a));
        assert!(tree.is_leaf(b));
        assert!(tree.is_leaf(c));
    }

    #[test]
    fn get_mut_edits_data() {
        let (mut tree, _root, a, ..) = build_tree();
        tree.get_mut(a).unwrap().preferred_width = 3.0;
        assert_eq!(tree.get(a).unwrap().preferred_width, 3.0);
    }

    #[test]
    fn walk_depth_first() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn leaves_in_visual_order() {
        let (tree, _root, _a, b, c, d) = build_tree();
        assert_eq!(tree.leaves(), vec![c, d, b]);
        assert_eq!(tree.frame_count(), 5);
    }

    #[test]
    fn pixels_rounds_and_clamps() {
        assert_eq!(pixels(255.5), 256);
        assert_eq!(pixels(-3.0), 0);
        assert_eq!(pixels(f64::NAN), 0);
        assert_eq!(pixels(f64::INFINITY), 0);
    }
}
