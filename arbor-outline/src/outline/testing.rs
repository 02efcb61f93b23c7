//! Testing utilities for tree assertions
//!
//!     Tree-shape tests want assurance on the whole hierarchy: names, kinds,
//!     kind-specific fields and child counts, not just node totals. Matching
//!     that by hand means nested indexing and `matches!` boilerplate in every
//!     test, which buries what is actually being asserted.
//!
//!     [assert_tree] provides a small fluent API instead:
//!
//!     ```rust,ignore
//!     use arbor_outline::outline::testing::assert_tree;
//!
//!     assert_tree(&tree)
//!         .child_count(1)
//!         .child(0, |folder| {
//!             folder.is_folder().named("models").child_count(1).child(0, |file| {
//!                 file.is_file().named("user").extension("py");
//!             });
//!         });
//!     ```
//!
//!     Assertions panic with the failing path spelled out, so a broken test
//!     points at the exact node that went wrong.

use crate::outline::ast::{NodeId, NodeKind, Scope, Tree};

/// Entry point: assert on the root's children.
pub fn assert_tree(tree: &Tree) -> NodeAssertion<'_> {
    NodeAssertion {
        tree,
        id: Tree::ROOT,
        path: "structure".to_string(),
    }
}

/// Fluent assertions on one node and its subtree.
pub struct NodeAssertion<'a> {
    tree: &'a Tree,
    id: NodeId,
    path: String,
}

impl<'a> NodeAssertion<'a> {
    fn node(&self) -> &'a crate::outline::ast::Node {
        self.tree.node(self.id)
    }

    pub fn named(self, expected: &str) -> Self {
        assert_eq!(
            self.node().name,
            expected,
            "node {} has unexpected name",
            self.path
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tree.children(self.id).len(),
            expected,
            "node {} has unexpected child count",
            self.path
        );
        self
    }

    /// Descends into the `index`-th child and runs `check` on it.
    pub fn child(self, index: usize, check: impl FnOnce(NodeAssertion<'a>)) -> Self {
        let children = self.tree.children(self.id);
        let id = *children
            .get(index)
            .unwrap_or_else(|| panic!("node {} has no child {}", self.path, index));
        check(NodeAssertion {
            tree: self.tree,
            id,
            path: format!("{}/{}", self.path, self.tree.node(id).name),
        });
        self
    }

    pub fn at_depth(self, expected: usize) -> Self {
        assert_eq!(
            self.tree.depth(self.id),
            expected,
            "node {} sits at unexpected depth",
            self.path
        );
        self
    }

    pub fn is_folder(self) -> Self {
        assert!(
            matches!(self.node().kind, NodeKind::Folder),
            "node {} is not a folder: {:?}",
            self.path,
            self.node().kind
        );
        self
    }

    pub fn is_file(self) -> Self {
        assert!(
            matches!(self.node().kind, NodeKind::File { .. }),
            "node {} is not a file: {:?}",
            self.path,
            self.node().kind
        );
        self
    }

    pub fn is_class(self) -> Self {
        assert!(
            matches!(self.node().kind, NodeKind::Class { .. }),
            "node {} is not a class: {:?}",
            self.path,
            self.node().kind
        );
        self
    }

    pub fn extension(self, expected: &str) -> Self {
        match &self.node().kind {
            NodeKind::File { extension } => assert_eq!(
                extension.as_deref(),
                Some(expected),
                "file {} has unexpected extension",
                self.path
            ),
            other => panic!("node {} is not a file: {:?}", self.path, other),
        }
        self
    }

    pub fn no_extension(self) -> Self {
        match &self.node().kind {
            NodeKind::File { extension } => assert_eq!(
                extension, &None,
                "file {} unexpectedly has an extension",
                self.path
            ),
            other => panic!("node {} is not a file: {:?}", self.path, other),
        }
        self
    }

    pub fn inherits(self, expected: &str) -> Self {
        match &self.node().kind {
            NodeKind::Class { inherits } => assert_eq!(
                inherits.as_deref(),
                Some(expected),
                "class {} has unexpected inheritance",
                self.path
            ),
            other => panic!("node {} is not a class: {:?}", self.path, other),
        }
        self
    }

    pub fn is_method(self, return_type: &str, arguments: &str, scope: Scope) -> Self {
        match &self.node().kind {
            NodeKind::Method {
                return_type: rt,
                arguments: args,
                scope: s,
            } => {
                assert_eq!(rt, return_type, "method {} return type", self.path);
                assert_eq!(args, arguments, "method {} arguments", self.path);
                assert_eq!(*s, scope, "method {} scope", self.path);
            }
            other => panic!("node {} is not a method: {:?}", self.path, other),
        }
        self
    }

    pub fn is_property(self, data_type: &str, scope: Scope) -> Self {
        match &self.node().kind {
            NodeKind::Property {
                data_type: dt,
                scope: s,
            } => {
                assert_eq!(dt, data_type, "property {} data type", self.path);
                assert_eq!(*s, scope, "property {} scope", self.path);
            }
            other => panic!("node {} is not a property: {:?}", self.path, other),
        }
        self
    }
}
