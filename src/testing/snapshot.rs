//! Snapshot rendering helpers.
//!
//! Functions for converting a frame tree or a painted canvas into plain-text
//! strings suitable for snapshot testing and assertions.

use std::fmt::Write as _;

use crate::color::Color;
use crate::frame::{FrameId, FrameTree};
use crate::render::Canvas;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Describe the tree one frame per line, indented two spaces per level.
///
/// Internal frames print their region and orientation, leaves their region
/// and color. The final line does not have a trailing newline.
///
/// ```
/// use touchtile::frame::FrameTree;
/// use touchtile::geometry::Size;
/// use touchtile::testing::dump_tree;
///
/// let tree = FrameTree::new(Size::new(80, 24));
/// assert_eq!(dump_tree(&tree), "leaf 0,0 80x24 #ffffff");
/// ```
pub fn dump_tree(tree: &FrameTree) -> String {
    let mut out = String::new();
    dump_frame(tree, tree.root(), 0, &mut out);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn dump_frame(tree: &FrameTree, id: FrameId, depth: usize, out: &mut String) {
    let Some(data) = tree.get(id) else { return };
    let indent = "  ".repeat(depth);
    let children = tree.children(id);
    // Writing to a String cannot fail.
    let _ = if children.is_empty() {
        writeln!(out, "{indent}leaf {} {}", data.region(), data.color)
    } else {
        writeln!(out, "{indent}frame {} {}", data.region(), data.orientation)
    };
    for &child in children {
        dump_frame(tree, child, depth + 1, out);
    }
}

/// Render a canvas as text, one character per cell.
///
/// Colors found in `legend` print as their character; anything else prints
/// as `'.'`. Rows are joined with `'\n'`.
pub fn canvas_to_string(canvas: &Canvas, legend: &[(Color, char)]) -> String {
    (0..canvas.height())
        .filter_map(|y| canvas.row(y))
        .map(|row| {
            row.iter()
                .map(|color| {
                    legend
                        .iter()
                        .find(|(c, _)| c == color)
                        .map_or('.', |&(_, ch)| ch)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
