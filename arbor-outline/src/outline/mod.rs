pub mod ast;
pub mod building;
pub mod classify;
pub mod error;
pub mod snapshot;
pub mod testing;
pub mod validating;

pub use ast::{Node, NodeId, NodeKind, Scope, Tree};
pub use building::build_tree;
pub use classify::{classify_line, depth_of, LineClass};
pub use error::{OutlineResult, StructureError};
pub use snapshot::tree_text;
pub use validating::is_legal_child;
