//! Tree building
//!
//!     Turns an ordered sequence of raw outline lines into one validated
//!     [Tree]. Each recognized line is placed by its tab depth, validated
//!     against its prospective parent, and appended; unrecognized lines are
//!     skipped. The first containment violation aborts the whole build.
//!
//! Placement and clamping
//!
//!     Placement descends from the root by following last-child pointers,
//!     one step per tab. When a step finds no child to descend into, the
//!     descent stops right there and the node attaches at that point, even
//!     if tabs remain unconsumed.
//!
//!     The consequence is deliberate: a line indented deeper than the tree
//!     currently reaches is clamped to the deepest node on the most recent
//!     branch, and a line under-indented relative to its logical parent is
//!     silently reparented rather than rejected. Outlines whose indentation
//!     exactly mirrors their nesting are unaffected (each node lands at
//!     exactly its tab depth); sloppier outlines still build. Do not tighten
//!     this to strict depth matching — the permissiveness is part of the
//!     format's contract and is pinned by tests.

use crate::outline::ast::{NodeId, Tree};
use crate::outline::classify::{classify_line, depth_of};
use crate::outline::error::OutlineResult;

/// Builds the outline tree from raw lines, tabs preserved verbatim.
pub fn build_tree<I, S>(lines: I) -> OutlineResult<Tree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = Tree::new();
    for line in lines {
        let line = line.as_ref();
        let Some(class) = classify_line(line) else {
            continue;
        };
        let parent = placement_point(&tree, depth_of(line));
        let (name, kind) = class.into_parts();
        tree.attach(parent, name, kind)?;
    }
    Ok(tree)
}

/// Descends `depth` last-child steps from the root, stopping early at the
/// first node with no children. The node reached is the attachment point.
fn placement_point(tree: &Tree, depth: usize) -> NodeId {
    let mut current = Tree::ROOT;
    for _ in 0..depth {
        match tree.last_child(current) {
            Some(last) => current = last,
            None => break,
        }
    }
    current
}
