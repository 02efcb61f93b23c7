//! Breadcrumb path stack
//!
//! An owned record of how far into the project tree the materializer has
//! descended: the fixed project root plus a stack of directory names. All
//! "current directory" questions are answered by joining the two, never by
//! consulting or mutating process state.

use arbor_outline::outline::ast::ROOT_NAME;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Breadcrumb {
    root: PathBuf,
    stack: Vec<String>,
}

impl Breadcrumb {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            stack: Vec::new(),
        }
    }

    /// The fixed project root this breadcrumb is anchored to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the directory currently entered, if any.
    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Absolute path of the current directory: root joined with the stack.
    pub fn current_dir(&self) -> PathBuf {
        let mut dir = self.root.clone();
        for name in &self.stack {
            dir.push(name);
        }
        dir
    }

    /// Descend into a directory.
    pub fn enter(&mut self, name: &str) {
        self.stack.push(name.to_string());
    }

    /// Pop until the entered directory is `target`. The synthetic root name
    /// resets all the way back to the project root; an unknown target also
    /// bottoms out there rather than walking past it.
    pub fn ascend_to(&mut self, target: &str) {
        if target == ROOT_NAME {
            self.stack.clear();
            return;
        }
        while let Some(top) = self.stack.last() {
            if top == target {
                return;
            }
            self.stack.pop();
        }
    }

    /// Drop all entered directories, returning to the project root.
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_dir_joins_root_with_entered_names() {
        let mut crumb = Breadcrumb::new("/project");
        assert_eq!(crumb.current_dir(), PathBuf::from("/project"));
        crumb.enter("models");
        crumb.enter("v2");
        assert_eq!(crumb.current_dir(), PathBuf::from("/project/models/v2"));
        assert_eq!(crumb.top(), Some("v2"));
    }

    #[test]
    fn ascend_pops_to_the_named_directory() {
        let mut crumb = Breadcrumb::new("/project");
        crumb.enter("a");
        crumb.enter("b");
        crumb.enter("c");
        crumb.ascend_to("a");
        assert_eq!(crumb.top(), Some("a"));
        assert_eq!(crumb.current_dir(), PathBuf::from("/project/a"));
    }

    #[test]
    fn ascend_to_root_name_clears_the_stack() {
        let mut crumb = Breadcrumb::new("/project");
        crumb.enter("a");
        crumb.enter("b");
        crumb.ascend_to(ROOT_NAME);
        assert_eq!(crumb.top(), None);
        assert_eq!(crumb.current_dir(), PathBuf::from("/project"));
    }

    #[test]
    fn ascend_to_unknown_target_bottoms_out_at_the_root() {
        let mut crumb = Breadcrumb::new("/project");
        crumb.enter("a");
        crumb.ascend_to("never-entered");
        assert_eq!(crumb.top(), None);
    }
}
