//! Text rendering of a built tree
//!
//! Renders the tree as indented lines for terminal inspection, one node per
//! line, two spaces per level. Filesystem kinds render with their final
//! on-disk spelling (trailing slash for folders, extension applied to
//! files); member kinds render with their signature details.

use crate::outline::ast::{NodeId, NodeKind, Scope, Tree};
use std::fmt::Write;

/// Renders the whole tree, starting from the root's children.
pub fn tree_text(tree: &Tree) -> String {
    let mut out = String::new();
    for &child in tree.children(Tree::ROOT) {
        render(tree, child, 0, &mut out);
    }
    out
}

fn render(tree: &Tree, id: NodeId, level: usize, out: &mut String) {
    let node = tree.node(id);
    for _ in 0..level {
        out.push_str("  ");
    }
    match &node.kind {
        NodeKind::Root => {}
        NodeKind::Folder => {
            let _ = writeln!(out, "{}/", node.name);
        }
        NodeKind::File { extension } => match extension {
            Some(ext) => {
                let _ = writeln!(out, "{}.{}", node.name, ext);
            }
            None => {
                let _ = writeln!(out, "{}", node.name);
            }
        },
        NodeKind::Class { inherits } => match inherits {
            Some(base) => {
                let _ = writeln!(out, "class {}: {}", node.name, base);
            }
            None => {
                let _ = writeln!(out, "class {}", node.name);
            }
        },
        NodeKind::Method {
            return_type,
            arguments,
            scope,
        } => {
            let _ = writeln!(
                out,
                "{} {} {}({})",
                scope_marker(*scope),
                return_type,
                node.name,
                arguments
            );
        }
        NodeKind::Property { data_type, scope } => {
            let _ = writeln!(out, "{} {} {}", scope_marker(*scope), data_type, node.name);
        }
    }
    for &child in tree.children(id) {
        render(tree, child, level + 1, out);
    }
}

fn scope_marker(scope: Scope) -> char {
    match scope {
        Scope::Public => '+',
        Scope::Private => '-',
        Scope::Protected => '#',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::building::build_tree;

    #[test]
    fn renders_nested_outline_with_final_spellings() {
        let tree = build_tree([
            "models/",
            "\tuser.py",
            "\t\tUser:",
            "\t\t\t+ str name",
            "\t\t\t+ str email()",
        ])
        .unwrap();

        let expected = "\
models/
  user.py
    class User
      + str name
      + str email()
";
        assert_eq!(tree_text(&tree), expected);
    }

    #[test]
    fn renders_depth_zero_siblings_in_outline_order() {
        let tree = build_tree(["a.py", "b.py"]).unwrap();
        assert_eq!(tree_text(&tree), "a.py\nb.py\n");
    }
}
