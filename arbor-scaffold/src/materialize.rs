//! Filesystem materialization
//!
//!     Walks a validated outline tree in pre-order and mirrors it on disk:
//!     folders become directories, files become empty files, and member
//!     nodes are handed to the injected [MemberWriter]. Structure validation
//!     happened at build time, so by the time a tree reaches this module
//!     every edge is legal and the walk only has to translate kinds into
//!     filesystem operations.
//!
//! Position tracking
//!
//!     Before creating a folder or file the walk re-aligns its [Breadcrumb]
//!     with the node's parent: if the parent's name is not the directory
//!     currently entered, the breadcrumb pops until it is (or until it
//!     bottoms out at the project root, which is also where the synthetic
//!     root name resets to). Descending happens only through folder nodes;
//!     files are created in place and never entered.
//!
//! Idempotence
//!
//!     Existing entries are never created again, truncated or otherwise
//!     touched. A run that failed halfway can simply be repeated: entries
//!     from the earlier attempt read as already satisfied and the walk
//!     continues past them.

use crate::breadcrumb::Breadcrumb;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::writer::MemberWriter;
use arbor_outline::outline::ast::{NodeId, NodeKind, Tree};
use std::fs;
use std::path::PathBuf;

/// Materializes outline trees under a fixed project root.
pub struct Materializer<W: MemberWriter> {
    breadcrumb: Breadcrumb,
    writer: W,
}

impl<W: MemberWriter> Materializer<W> {
    /// `root` is the directory materialization happens under; it must
    /// already exist and be writable.
    pub fn new(root: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            breadcrumb: Breadcrumb::new(root),
            writer,
        }
    }

    /// Walks the tree and produces its filesystem side effects. Aborts on
    /// the first failure; entries created before it are left in place.
    pub fn materialize(&mut self, tree: &Tree) -> ScaffoldResult<()> {
        self.breadcrumb.reset();
        for id in tree.pre_order() {
            self.build_node(tree, id)?;
        }
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn build_node(&mut self, tree: &Tree, id: NodeId) -> ScaffoldResult<()> {
        let node = tree.node(id);
        match &node.kind {
            NodeKind::Folder => {
                self.align(tree, id);
                let dir = self.breadcrumb.current_dir().join(&node.name);
                if !dir.exists() {
                    fs::create_dir(&dir).map_err(|source| ScaffoldError::FileCreate {
                        kind: node.kind.label(),
                        name: node.name.clone(),
                        source,
                    })?;
                }
                self.breadcrumb.enter(&node.name);
            }
            NodeKind::File { extension } => {
                self.align(tree, id);
                let file_name = match extension {
                    Some(ext) => format!("{}.{}", node.name, ext),
                    None => node.name.clone(),
                };
                let path = self.breadcrumb.current_dir().join(&file_name);
                if !path.exists() {
                    fs::File::create(&path).map_err(|source| ScaffoldError::FileCreate {
                        kind: node.kind.label(),
                        name: node.name.clone(),
                        source,
                    })?;
                }
                // files are never entered; the breadcrumb stays on their parent
            }
            NodeKind::Class { .. } | NodeKind::Method { .. } | NodeKind::Property { .. } => {
                let dir = self.breadcrumb.current_dir();
                self.writer.write_member(tree, id, &dir).map_err(|source| {
                    ScaffoldError::FileWrite {
                        kind: node.kind.label(),
                        name: node.name.clone(),
                        source,
                    }
                })?;
            }
            // the synthetic root is not part of the walk
            NodeKind::Root => {}
        }
        Ok(())
    }

    /// Pops the breadcrumb until the entered directory is the node's
    /// parent. No-op when already aligned.
    fn align(&mut self, tree: &Tree, id: NodeId) {
        let parent = tree.parent_name(id);
        if self.breadcrumb.top() != Some(parent) {
            self.breadcrumb.ascend_to(parent);
        }
    }
}
