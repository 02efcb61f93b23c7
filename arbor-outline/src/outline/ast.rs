//! Tree model for parsed outlines
//!
//!     The tree is arena backed: all nodes live in one `Vec` owned by [Tree],
//!     and relationships are expressed as [NodeId] indices. Children are owned
//!     sequences in insertion order; the parent link is a plain back-index,
//!     never an owning reference, so there are no ownership cycles to manage.
//!
//!     Node zero is always the synthetic root, named "structure". It stands
//!     for the project root directory and is never written to disk.
//!
//! Kinds
//!
//!     A node's role is a closed tagged variant, [NodeKind]. Each variant
//!     carries only the fields valid for that role (a file's extension, a
//!     method's signature parts, and so on), so an invalid combination such
//!     as a folder with a return type cannot be represented at all.
//!
//!     Once attached, a node's kind, name and parent never change. Nodes are
//!     never removed; a tree is built once, inspected or materialized, and
//!     dropped.

use crate::outline::error::StructureError;
use crate::outline::validating::is_legal_child;
use serde::Serialize;

/// Name of the synthetic root node.
pub const ROOT_NAME: &str = "structure";

/// Index of a node inside its owning [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

/// Member visibility, mapped from the outline's scope markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Public,
    Private,
    Protected,
}

impl Scope {
    /// Maps an outline scope marker to a scope: `+` public, `-` private,
    /// `#` protected.
    pub fn from_marker(marker: &str) -> Option<Scope> {
        match marker {
            "+" => Some(Scope::Public),
            "-" => Some(Scope::Private),
            "#" => Some(Scope::Protected),
            _ => None,
        }
    }
}

/// The closed set of structural roles a node can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Folder,
    File {
        extension: Option<String>,
    },
    Class {
        inherits: Option<String>,
    },
    Method {
        return_type: String,
        arguments: String,
        scope: Scope,
    },
    Property {
        data_type: String,
        scope: Scope,
    },
}

impl NodeKind {
    /// Short lowercase label used in error messages and tree rendering.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Root => "structure",
            NodeKind::Folder => "folder",
            NodeKind::File { .. } => "file",
            NodeKind::Class { .. } => "class",
            NodeKind::Method { .. } => "method",
            NodeKind::Property { .. } => "property",
        }
    }

    /// True for the kinds that become filesystem entries.
    pub fn is_entry(&self) -> bool {
        matches!(self, NodeKind::Folder | NodeKind::File { .. })
    }

    /// True for the kinds handed to the member-writer hook.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            NodeKind::Class { .. } | NodeKind::Method { .. } | NodeKind::Property { .. }
        )
    }
}

/// One node of the outline tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip)]
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena-backed outline tree. Node 0 is the synthetic root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: ROOT_NAME.to_string(),
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, the synthetic root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The most recently attached child of `id`, if any.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Name of a node's parent; the root reports its own name so callers
    /// can treat "directly under the project root" uniformly.
    pub fn parent_name(&self, id: NodeId) -> &str {
        match self.nodes[id.0].parent {
            Some(parent) => &self.nodes[parent.0].name,
            None => ROOT_NAME,
        }
    }

    /// Validates the (parent, child) edge and appends the new node as the
    /// last child of `parent`. The tree is left untouched on rejection.
    pub fn attach(
        &mut self,
        parent: NodeId,
        name: String,
        kind: NodeKind,
    ) -> Result<NodeId, StructureError> {
        let parent_node = &self.nodes[parent.0];
        if !is_legal_child(&parent_node.kind, &kind) {
            return Err(StructureError::IllegalChild {
                parent_kind: parent_node.kind.label(),
                parent_name: parent_node.name.clone(),
                child_kind: kind.label(),
                child_name: name,
            });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Depth-first pre-order traversal: every node is yielded before its
    /// descendants, children in insertion order. The synthetic root is not
    /// yielded.
    pub fn pre_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(Self::ROOT).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev());
            Some(id)
        })
    }

    /// Edge count from the root down to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            depth += 1;
            current = parent;
        }
        depth
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_holds_only_the_synthetic_root() {
        let tree = Tree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.node(Tree::ROOT).name, ROOT_NAME);
        assert_eq!(tree.node(Tree::ROOT).kind, NodeKind::Root);
        assert!(tree.children(Tree::ROOT).is_empty());
    }

    #[test]
    fn attach_sets_parent_and_preserves_insertion_order() {
        let mut tree = Tree::new();
        let a = tree
            .attach(Tree::ROOT, "a".into(), NodeKind::Folder)
            .unwrap();
        let b = tree
            .attach(Tree::ROOT, "b".into(), NodeKind::Folder)
            .unwrap();
        assert_eq!(tree.children(Tree::ROOT), &[a, b]);
        assert_eq!(tree.node(a).parent, Some(Tree::ROOT));
        assert_eq!(tree.last_child(Tree::ROOT), Some(b));
    }

    #[test]
    fn pre_order_visits_parents_before_descendants() {
        let mut tree = Tree::new();
        let models = tree
            .attach(Tree::ROOT, "models".into(), NodeKind::Folder)
            .unwrap();
        let user = tree
            .attach(
                models,
                "user".into(),
                NodeKind::File {
                    extension: Some("py".into()),
                },
            )
            .unwrap();
        let lib = tree
            .attach(Tree::ROOT, "lib".into(), NodeKind::Folder)
            .unwrap();
        let visited: Vec<NodeId> = tree.pre_order().collect();
        assert_eq!(visited, vec![models, user, lib]);
    }

    #[test]
    fn depth_counts_edges_from_root() {
        let mut tree = Tree::new();
        let models = tree
            .attach(Tree::ROOT, "models".into(), NodeKind::Folder)
            .unwrap();
        let user = tree
            .attach(models, "user".into(), NodeKind::File { extension: None })
            .unwrap();
        assert_eq!(tree.depth(Tree::ROOT), 0);
        assert_eq!(tree.depth(models), 1);
        assert_eq!(tree.depth(user), 2);
    }

    #[test]
    fn scope_marker_mapping_is_exhaustive_and_exclusive() {
        assert_eq!(Scope::from_marker("+"), Some(Scope::Public));
        assert_eq!(Scope::from_marker("-"), Some(Scope::Private));
        assert_eq!(Scope::from_marker("#"), Some(Scope::Protected));
        assert_eq!(Scope::from_marker("*"), None);
        assert_eq!(Scope::from_marker(""), None);
    }
}
