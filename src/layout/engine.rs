//! Ratio/absolute layout computation over the frame tree.
//!
//! [`LayoutEngine`] walks the tree top-down. For every internal frame it
//! divides the frame's region among its children along the split axis, then
//! descends. Leaves keep whatever region their parent assigned.

use crate::error::{Result, TilingError};
use crate::frame::tree::pixels;
use crate::frame::{FrameId, FrameTree, SizingMode};
use crate::geometry::Region;

/// How absolute-sized children share space with ratio-sized siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AbsolutePolicy {
    /// Absolute pixels are taken out of the parent first and ratio siblings
    /// share what is left. Absolute extents are clamped to the parent, so
    /// children never leave their parent's region.
    #[default]
    Reserve,
    /// Ratio siblings share the parent's full extent as if absolute siblings
    /// were not there, and absolute sizes are used unclamped. Mixed parents
    /// can overflow.
    Literal,
}

/// What a layout pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Number of frames visited, including the starting frame.
    pub visited: usize,
    /// Frames whose ratio children all had zero weight and were given equal
    /// shares instead.
    pub degenerate: Vec<FrameId>,
}

/// Computes frame regions from preferred sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutEngine {
    policy: AbsolutePolicy,
}

impl LayoutEngine {
    /// Create an engine with the given absolute-sizing policy.
    pub fn new(policy: AbsolutePolicy) -> Self {
        Self { policy }
    }

    /// The absolute-sizing policy in use.
    pub fn policy(&self) -> AbsolutePolicy {
        self.policy
    }

    /// Recompute every region below the root.
    ///
    /// The root's own region is taken as given. Running this twice without
    /// mutating the tree in between produces identical regions.
    pub fn relayout(&self, tree: &mut FrameTree) -> LayoutReport {
        let root = tree.root();
        self.relayout_from(tree, root)
    }

    /// Recompute every region below `id`, leaving the rest of the tree alone.
    pub fn relayout_subtree(&self, tree: &mut FrameTree, id: FrameId) -> Result<LayoutReport> {
        if !tree.contains(id) {
            return Err(TilingError::UnknownFrame(id));
        }
        Ok(self.relayout_from(tree, id))
    }

    fn relayout_from(&self, tree: &mut FrameTree, start: FrameId) -> LayoutReport {
        let mut report = LayoutReport::default();
        let mut stack = vec![start];

        // A parent's region is always final before its children are popped.
        while let Some(current) = stack.pop() {
            report.visited += 1;
            let kids = tree.children(current).to_vec();
            if kids.is_empty() {
                continue;
            }
            let regions = self.partition(tree, current, &kids, &mut report);
            for (&child, region) in kids.iter().zip(regions) {
                tree.set_region(child, region);
            }
            stack.extend(kids.iter().rev());
        }

        log::debug!(
            "relayout from {start:?}: {} frames, {} degenerate",
            report.visited,
            report.degenerate.len()
        );
        report
    }

    /// Divide `parent`'s region among `kids`, in order.
    fn partition(
        &self,
        tree: &FrameTree,
        parent: FrameId,
        kids: &[FrameId],
        report: &mut LayoutReport,
    ) -> Vec<Region> {
        let Some(frame) = tree.get(parent) else {
            return Vec::new();
        };
        let orientation = frame.orientation;
        let (start, extent, cross_start, cross_extent) = orientation.decompose(frame.region());
        let extent = extent.max(0);
        let cross_extent = cross_extent.max(0);
        let end = start.saturating_add(extent);

        let sizings: Vec<ChildSizing> = kids
            .iter()
            .map(|&kid| match tree.get(kid) {
                Some(data) => ChildSizing {
                    sizing: data.sizing,
                    along: data.preferred_along(orientation),
                    across: data.preferred_across(orientation),
                },
                None => ChildSizing::EMPTY,
            })
            .collect();

        let absolute_total = sizings
            .iter()
            .filter(|s| s.sizing == SizingMode::Absolute)
            .map(|s| pixels(s.along))
            .fold(0i32, i32::saturating_add);
        let ratio_space = match self.policy {
            AbsolutePolicy::Reserve => extent.saturating_sub(absolute_total).max(0),
            AbsolutePolicy::Literal => extent,
        };

        let ratio_count = sizings.iter().filter(|s| s.sizing == SizingMode::Ratio).count();
        let weight_sum = sizings
            .iter()
            .filter(|s| s.sizing == SizingMode::Ratio)
            .map(|s| weight(s.along))
            .fold(0.0, |acc, w| acc + w);
        let degenerate = ratio_count > 0 && !(weight_sum.is_finite() && weight_sum > 0.0);
        let weight_sum = if degenerate {
            log::warn!(
                "frame {parent:?}: {ratio_count} ratio children weigh nothing, sharing equally"
            );
            report.degenerate.push(parent);
            ratio_count as f64
        } else {
            weight_sum
        };

        // Cumulative rounding: each ratio child ends at the rounded position
        // of its cumulative weight, so ratio children tile `ratio_space`
        // exactly and no child is off by a full pixel.
        let mut cursor = start;
        let mut cumulative = 0.0;
        let mut allotted = 0;
        let mut regions = Vec::with_capacity(sizings.len());

        for child in &sizings {
            let (main, cross) = match child.sizing {
                SizingMode::Ratio => {
                    cumulative += if degenerate { 1.0 } else { weight(child.along) };
                    let target = (f64::from(ratio_space) * cumulative / weight_sum).round() as i32;
                    let main = target - allotted;
                    allotted = target;
                    (main, cross_extent)
                }
                SizingMode::Absolute => match self.policy {
                    AbsolutePolicy::Reserve => (
                        pixels(child.along).min(end.saturating_sub(cursor).max(0)),
                        pixels(child.across).min(cross_extent),
                    ),
                    AbsolutePolicy::Literal => (pixels(child.along), pixels(child.across)),
                },
            };
            regions.push(orientation.compose(cursor, main, cross_start, cross));
            cursor = cursor.saturating_add(main);
        }

        regions
    }
}

/// Preferred sizes of one child, projected onto its parent's axes.
#[derive(Debug, Clone, Copy)]
struct ChildSizing {
    sizing: SizingMode,
    along: f64,
    across: f64,
}

impl ChildSizing {
    const EMPTY: ChildSizing = ChildSizing {
        sizing: SizingMode::Ratio,
        along: 0.0,
        across: 0.0,
    };
}

/// A ratio weight, with non-finite and negative weights counting as zero.
fn weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ===========================================================================
// Tests
// ===========================================================================
