//! Member-writer hook
//!
//! Classes, methods and properties produce no filesystem entries of their
//! own; they describe source content for the file that encloses them. What
//! that content looks like is language specific and outside this crate's
//! business, so the materializer delegates each such node to a hook the
//! host injects.

use arbor_outline::outline::ast::{NodeId, Tree};
use std::io;
use std::path::Path;

/// Injected strategy for emitting class/method/property skeletons.
///
/// Called once per member node during the pre-order walk, in outline order.
/// `enclosing_dir` is the directory holding the file the member belongs to;
/// the enclosing file itself is reachable by walking the node's parents.
/// Errors are surfaced as [ScaffoldError::FileWrite](crate::ScaffoldError)
/// and abort the run.
pub trait MemberWriter {
    fn write_member(&mut self, tree: &Tree, node: NodeId, enclosing_dir: &Path) -> io::Result<()>;
}

/// Writer that emits nothing. Scaffolding with it still creates every
/// folder and file; member nodes are validated and walked but leave the
/// files empty.
#[derive(Debug, Default)]
pub struct NoopWriter;

impl MemberWriter for NoopWriter {
    fn write_member(&mut self, _tree: &Tree, _node: NodeId, _enclosing_dir: &Path) -> io::Result<()> {
        Ok(())
    }
}
