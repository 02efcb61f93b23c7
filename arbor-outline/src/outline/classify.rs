//! Line Classification
//!
//!     Each outline line is matched against five grammars, tried in a fixed
//!     priority order: file, class, folder, property, method. The first match
//!     wins. This ordering matters because the grammars overlap — a bare
//!     lowercase word is a file, not a truncated folder, and a scope-marked
//!     line with a trailing argument list must fall through the property
//!     grammar before the method grammar claims it.
//!
//!     Lines matching no grammar (blank lines, prose, stray punctuation) are
//!     simply ignored; they produce no node and no error.
//!
//! Depth
//!
//!     A line's depth is the count of its leading tab characters, and nothing
//!     else: spaces may appear before the content and are tolerated by every
//!     grammar, but they never contribute to depth.

use crate::outline::ast::{NodeKind, Scope};
use once_cell::sync::Lazy;
use regex::Regex;

/// File: lowercase-initial identifier, optional interior dots, optional
/// single trailing `.extension`.
static FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t ]*([a-z][\w.]*?)(?:\.(\w+))?[ \t]*$").expect("file grammar"));

/// Class: uppercase-initial identifier, optional colon followed by a
/// comma-separated list of identifiers; only the first is captured.
static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t ]*([A-Z]\w*)\s*:?\s*(\w+)?(?:\s*,?\s*\w+)*[ \t]*$").expect("class grammar")
});

/// Folder: identifier with a literal trailing slash.
static FOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t ]*(\w+)/[ \t]*$").expect("folder grammar"));

/// Property: scope marker, then two whitespace-separated tokens and nothing
/// else on the line.
static PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t ]*([+\-#])\s*(\w+)\s+(\w+)[ \t]*$").expect("property grammar"));

/// Method: like a property but with a parenthesized (possibly empty)
/// argument list ending the line.
static METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t ]*([+\-#])\s*(\w+)\s+(\w+)\s*\((.*)\)[ \t]*$").expect("method grammar")
});

/// A classified outline line: the node name plus its kind-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LineClass {
    pub name: String,
    pub kind: NodeKind,
}

impl LineClass {
    pub fn into_parts(self) -> (String, NodeKind) {
        (self.name, self.kind)
    }
}

/// Number of leading tab characters. Spaces do not count toward depth.
pub fn depth_of(line: &str) -> usize {
    line.chars().take_while(|c| *c == '\t').count()
}

/// Matches one line against the five grammars in priority order.
///
/// Returns `None` for blank or unrecognized lines; such lines are skipped
/// by the tree builder without error.
pub fn classify_line(line: &str) -> Option<LineClass> {
    if let Some(caps) = FILE.captures(line) {
        return Some(LineClass {
            name: caps[1].to_string(),
            kind: NodeKind::File {
                extension: caps.get(2).map(|m| m.as_str().to_string()),
            },
        });
    }
    if let Some(caps) = CLASS.captures(line) {
        return Some(LineClass {
            name: caps[1].to_string(),
            kind: NodeKind::Class {
                inherits: caps.get(2).map(|m| m.as_str().to_string()),
            },
        });
    }
    if let Some(caps) = FOLDER.captures(line) {
        return Some(LineClass {
            name: caps[1].to_string(),
            kind: NodeKind::Folder,
        });
    }
    if let Some(caps) = PROPERTY.captures(line) {
        return Some(LineClass {
            name: caps[3].to_string(),
            kind: NodeKind::Property {
                data_type: caps[2].to_string(),
                scope: Scope::from_marker(&caps[1])?,
            },
        });
    }
    if let Some(caps) = METHOD.captures(line) {
        return Some(LineClass {
            name: caps[3].to_string(),
            kind: NodeKind::Method {
                return_type: caps[2].to_string(),
                arguments: caps[4].to_string(),
                scope: Scope::from_marker(&caps[1])?,
            },
        });
    }
    None
}
