//! Hit testing: map a point to the leaf frame under it.

use crate::error::{Result, TilingError};
use crate::frame::{FrameId, FrameTree};

/// Return the deepest leaf whose region contains `(x, y)`.
///
/// The point is first checked against the root, so a single-frame tree does
/// not claim points outside the window. Children are scanned in order and the
/// first one containing the point wins; if rounding ever produced overlapping
/// siblings, the earlier sibling takes the point.
///
/// Fails with [`TilingError::PositionOutsideTree`] when the point is outside
/// the root or falls in a gap between children.
pub fn locate(tree: &FrameTree, x: i32, y: i32) -> Result<FrameId> {
    let outside = TilingError::PositionOutsideTree { x, y };
    let mut current = tree.root();
    if !tree.region(current).contains(x, y) {
        return Err(outside);
    }

    loop {
        let kids = tree.children(current);
        if kids.is_empty() {
            return Ok(current);
        }
        current = kids
            .iter()
            .copied()
            .find(|&kid| tree.region(kid).contains(x, y))
            .ok_or(outside)?;
    }
}
