//! Containment rules
//!
//!     The outline's type system in one table. Applied by
//!     [Tree::attach](crate::outline::ast::Tree::attach) on every prospective
//!     (parent, child) edge, so a tree that finishes building holds no
//!     illegal edge by construction.
//!
//!     The rules:
//!         - folders and files live inside folders or directly under the root
//!         - classes live inside files
//!         - methods and properties live inside classes, or directly inside
//!           files (free functions and module-level values)
//!
//!     Note the asymmetry: the root accepts only filesystem kinds. A class
//!     with no enclosing file has nowhere to be written and is rejected.

use crate::outline::ast::NodeKind;

/// Pure containment check: may `child` be attached under `parent`?
pub fn is_legal_child(parent: &NodeKind, child: &NodeKind) -> bool {
    match child {
        NodeKind::Folder | NodeKind::File { .. } => {
            matches!(parent, NodeKind::Folder | NodeKind::Root)
        }
        NodeKind::Class { .. } => matches!(parent, NodeKind::File { .. }),
        NodeKind::Method { .. } | NodeKind::Property { .. } => {
            matches!(parent, NodeKind::Class { .. } | NodeKind::File { .. })
        }
        // the synthetic root is created once, never attached
        NodeKind::Root => false,
    }
}
