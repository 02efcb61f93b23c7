//! Error types for outline parsing and tree construction

use std::fmt;

/// Errors raised while building the outline tree.
///
/// Raised at attach time, before any filesystem work has begun; the first
/// violation aborts the whole build and no partial tree escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A node's kind is not a legal child of its placement point
    /// (e.g., a folder inside a file, a class outside any file).
    IllegalChild {
        parent_kind: &'static str,
        parent_name: String,
        child_kind: &'static str,
        child_name: String,
    },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::IllegalChild {
                parent_kind,
                parent_name,
                child_kind,
                child_name,
            } => {
                writeln!(f, "Illegal structure.")?;
                write!(
                    f,
                    "Cannot insert {} '{}' inside {} '{}'.",
                    child_kind, child_name, parent_kind, parent_name
                )
            }
        }
    }
}

impl std::error::Error for StructureError {}

/// Type alias for outline build results.
pub type OutlineResult<T> = Result<T, StructureError>;
