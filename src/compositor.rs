//! The compositor: owns the frame tree, reacts to pointer input, paints.
//!
//! A press is hit-tested against the tree. If the pressed button is bound to
//! an orientation, the leaf under the pointer is split that way. Either way a
//! hit asks for a repaint; a miss is dropped silently.

use crate::color::Color;
use crate::error::Result;
use crate::event::{PointerAction, PointerEvent, PointerListener, PointerOutcome, SplitBindings};
use crate::frame::{FrameData, FrameId, FrameTree, Orientation};
use crate::geometry::{Offset, Size};
use crate::layout::{derive_edge_handles, locate, EdgeHandle, HandlePlacement, LayoutReport};
use crate::render::Surface;
use crate::split::Splitter;

// ---------------------------------------------------------------------------
// RenderStyle
// ---------------------------------------------------------------------------

/// Colors and sizes used when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Background behind every frame.
    pub clear_color: Color,
    pub handle_color: Color,
    /// Handle circle diameter in pixels.
    pub handle_diameter: i32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            clear_color: Color::new(100, 100, 100),
            handle_color: Color::new(200, 0, 0),
            handle_diameter: 40,
        }
    }
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// Owns the frame tree and the policies applied to it.
#[derive(Debug)]
pub struct Compositor {
    tree: FrameTree,
    splitter: Splitter,
    placement: HandlePlacement,
    bindings: SplitBindings,
    style: RenderStyle,
}

impl Compositor {
    /// Take ownership of `tree` and lay it out with the splitter's engine.
    pub fn new(tree: FrameTree, splitter: Splitter) -> Self {
        let mut compositor = Self {
            tree,
            splitter,
            placement: HandlePlacement::default(),
            bindings: SplitBindings::default(),
            style: RenderStyle::default(),
        };
        compositor.relayout();
        compositor
    }

    pub fn with_placement(mut self, placement: HandlePlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_bindings(mut self, bindings: SplitBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// The starting layout: a 0.4 / 0.6 vertical split whose right half is
    /// split 0.3 / 0.7 horizontally.
    ///
    /// Regions are not computed yet; [`Compositor::new`] does that.
    pub fn demo_tree(size: Size) -> FrameTree {
        let mut tree = FrameTree::new(size);
        let root = tree.root();
        if let Some(data) = tree.get_mut(root) {
            data.color = Color::new(128, 0, 0);
            data.orientation = Orientation::Vertical;
        }

        // Inserting under ids that were just created cannot fail.
        if let Err(err) = seed_demo(&mut tree, root) {
            log::error!("seeding demo layout failed: {err}");
        }
        tree
    }

    pub fn tree(&self) -> &FrameTree {
        &self.tree
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn placement(&self) -> HandlePlacement {
        self.placement
    }

    pub fn bindings(&self) -> &SplitBindings {
        &self.bindings
    }

    /// Edge handles for the current layout.
    pub fn handles(&self) -> Vec<EdgeHandle> {
        derive_edge_handles(&self.tree, self.placement)
    }

    /// Recompute every region in the tree.
    pub fn relayout(&mut self) -> LayoutReport {
        self.splitter.engine().relayout(&mut self.tree)
    }

    /// Resize the root to `size` and relayout.
    pub fn resize(&mut self, size: Size) -> LayoutReport {
        self.tree.resize_root(size);
        self.relayout()
    }

    /// Split the leaf under `(x, y)`.
    ///
    /// Returns the leaf and its two new children.
    pub fn split_at(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(FrameId, FrameId, FrameId)> {
        let leaf = locate(&self.tree, x, y)?;
        let (first, second) = self.splitter.split(&mut self.tree, leaf, orientation)?;
        Ok((leaf, first, second))
    }

    /// Paint the leaves, then the handles on top, then present.
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.clear(self.style.clear_color);

        for leaf in self.tree.leaves() {
            let Some(data) = self.tree.get(leaf) else { continue };
            let region = data.region();
            if region.is_empty() {
                continue;
            }
            let outline = data.color.contrast();
            let (right, bottom) = (region.right() - 1, region.bottom() - 1);

            surface.fill_rect(region, data.color);
            surface.stroke_rect(region, outline);
            surface.draw_line(Offset::new(region.x, region.y), Offset::new(right, bottom), outline);
            surface.draw_line(Offset::new(region.x, bottom), Offset::new(right, region.y), outline);
        }

        for handle in self.handles() {
            surface.draw_circle(
                handle.position(),
                self.style.handle_diameter,
                self.style.handle_color,
            );
        }

        surface.present();
    }
}

fn seed_demo(tree: &mut FrameTree, root: FrameId) -> Result<()> {
    tree.insert_child(root, FrameData::ratio(0.4, 1.0).with_color(Color::new(0, 128, 0)))?;
    let right = tree.insert_child(
        root,
        FrameData::ratio(0.6, 1.0)
            .with_color(Color::new(0, 0, 255))
            .with_orientation(Orientation::Horizontal),
    )?;
    tree.insert_child(right, FrameData::ratio(1.0, 0.3).with_color(Color::new(0, 100, 100)))?;
    tree.insert_child(right, FrameData::ratio(1.0, 0.7).with_color(Color::new(100, 100, 0)))?;
    Ok(())
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(Self::demo_tree(Size::new(640, 480)), Splitter::default())
    }
}

impl PointerListener for Compositor {
    fn on_pointer_down(&mut self, event: PointerEvent) -> PointerOutcome {
        let PointerAction::Down(button) = event.action else {
            return PointerOutcome::Ignored;
        };
        let leaf = match locate(&self.tree, event.x, event.y) {
            Ok(leaf) => leaf,
            Err(err) => {
                log::trace!("dropping press: {err}");
                return PointerOutcome::Ignored;
            }
        };
        let Some(orientation) = self.bindings.resolve(button) else {
            return PointerOutcome::Redraw;
        };

        match self.splitter.split(&mut self.tree, leaf, orientation) {
            Ok((first, second)) => PointerOutcome::Split { leaf, first, second },
            Err(err) => {
                log::error!("split at ({}, {}) failed: {err}", event.x, event.y);
                PointerOutcome::Rejected
            }
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) -> PointerOutcome {
        self.resize(Size::new(i32::from(width), i32::from(height)));
        PointerOutcome::Redraw
    }
}

// ===========================================================================
// Tests
// ===========================================================================
