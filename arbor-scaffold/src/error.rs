//! Error types for materialization

use std::fmt;
use std::io;

/// Errors raised while materializing a tree. Every variant is fatal for the
/// run; entries created before the failure are left in place (no rollback).
#[derive(Debug)]
pub enum ScaffoldError {
    /// A directory or file could not be created (permissions, invalid
    /// name, underlying filesystem error).
    FileCreate {
        kind: &'static str,
        name: String,
        source: io::Error,
    },
    /// The member-writer hook failed while injecting source content.
    FileWrite {
        kind: &'static str,
        name: String,
        source: io::Error,
    },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::FileCreate { kind, name, source } => {
                write!(
                    f,
                    "{} '{}' could not be created: {}. Make sure you have proper permission.",
                    kind, name, source
                )
            }
            ScaffoldError::FileWrite { kind, name, source } => {
                write!(
                    f,
                    "could not write {} '{}' into its file: {}",
                    kind, name, source
                )
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::FileCreate { source, .. } => Some(source),
            ScaffoldError::FileWrite { source, .. } => Some(source),
        }
    }
}

/// Type alias for materialization results.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
