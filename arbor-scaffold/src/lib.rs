//! # arbor-scaffold
//!
//! Materializes a validated outline tree (from `arbor-outline`) as real
//! directories and empty files under a project root.
//!
//! The walk is pre-order and idempotent: entries that already exist are
//! reused untouched, so re-running the same outline against a populated
//! root is a no-op. Position inside the project is tracked with an owned
//! breadcrumb stack and explicit path joining; the process working
//! directory is never changed, so a [Materializer](materialize::Materializer)
//! can run alongside unrelated filesystem work in the same process.
//!
//! Class, method and property nodes create nothing themselves; they are
//! handed to an injected [MemberWriter](writer::MemberWriter), the hook a
//! host supplies to emit source-level skeletons into the enclosing file.

pub mod breadcrumb;
pub mod error;
pub mod materialize;
pub mod writer;

pub use breadcrumb::Breadcrumb;
pub use error::{ScaffoldError, ScaffoldResult};
pub use materialize::Materializer;
pub use writer::{MemberWriter, NoopWriter};
