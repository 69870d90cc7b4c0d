//! Splitting a leaf frame into two.

use crate::color::{ColorSource, RandomColors};
use crate::error::{Result, TilingError};
use crate::frame::{FrameData, FrameId, FrameTree, Orientation};
use crate::layout::LayoutEngine;

/// Turns leaves into internal frames with two equal children.
///
/// New frames get their colors from the injected [`ColorSource`].
pub struct Splitter {
    engine: LayoutEngine,
    colors: Box<dyn ColorSource>,
}

impl Splitter {
    /// Create a splitter laying out with `engine` and coloring from `colors`.
    pub fn new(engine: LayoutEngine, colors: impl ColorSource + 'static) -> Self {
        Self {
            engine,
            colors: Box::new(colors),
        }
    }

    /// The layout engine used after each split.
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Split `leaf` into two ratio children of weight 1.0 arranged by
    /// `orientation`, then lay out the subtree under `leaf`.
    ///
    /// Frames outside `leaf` keep their regions. Fails with
    /// [`TilingError::NotALeaf`] if `leaf` already has children.
    pub fn split(
        &mut self,
        tree: &mut FrameTree,
        leaf: FrameId,
        orientation: Orientation,
    ) -> Result<(FrameId, FrameId)> {
        if !tree.children(leaf).is_empty() {
            return Err(TilingError::NotALeaf(leaf));
        }
        let frame = tree.get_mut(leaf).ok_or(TilingError::UnknownFrame(leaf))?;
        frame.orientation = orientation;

        let first_color = self.colors.next_color();
        let second_color = self.colors.next_color();
        let first = tree.insert_child(leaf, FrameData::new().with_color(first_color))?;
        let second = tree.insert_child(leaf, FrameData::new().with_color(second_color))?;
        self.engine.relayout_subtree(tree, leaf)?;

        log::debug!("split {leaf:?} {orientation} into {first:?} and {second:?}");
        Ok((first, second))
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(LayoutEngine::default(), RandomColors::new())
    }
}

impl std::fmt::Debug for Splitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("engine", &self.engine)
            .field("colors", &"<dyn ColorSource>")
            .finish()
    }
}
