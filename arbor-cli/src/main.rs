//! Command-line interface for arbor
//! Reads an indentation-based outline file, builds the validated project
//! tree, and materializes it as directories and empty files.
//!
//! Usage:
//!   arbor `<outline>` [--root `<dir>`] [--format `<format>`]  - Scaffold the outline under the root
//!   arbor `<outline>` --check                                 - Build and print the tree, touch nothing

use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};

use arbor_outline::outline::{build_tree, tree_text, Tree};
use arbor_scaffold::{Materializer, NoopWriter};

fn main() {
    let matches = Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffold a project tree from a plain-text outline")
        .arg_required_else_help(true)
        .arg(
            Arg::new("outline")
                .help("Path to the outline file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .short('r')
                .help("Project root to scaffold under (default: the outline file's directory)"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Build and validate the tree without touching the filesystem")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Tree output after a successful build: tree, json or none (default: tree when checking, none otherwise)")
                .default_value("auto"),
        )
        .get_matches();

    let outline = matches
        .get_one::<String>("outline")
        .expect("outline path is required");
    let check = matches.get_flag("check");
    let format = matches.get_one::<String>("format").expect("has default");

    let source = std::fs::read_to_string(outline).unwrap_or_else(|e| {
        report_error(&format!(
            "Could not locate the project structure file '{}': {}",
            outline, e
        ));
    });

    let tree = build_tree(source.lines()).unwrap_or_else(|e| {
        report_error(&e.to_string());
    });

    if !check {
        let root = resolve_root(matches.get_one::<String>("root"), Path::new(outline));
        let mut materializer = Materializer::new(root, NoopWriter);
        materializer.materialize(&tree).unwrap_or_else(|e| {
            report_error(&e.to_string());
        });
    }

    print_tree(&tree, format, check);
}

/// The project root: `--root` when given, otherwise the outline file's own
/// directory (an outline anchored nowhere cannot be scaffolded).
fn resolve_root(flag: Option<&String>, outline: &Path) -> PathBuf {
    let root = match flag {
        Some(dir) => PathBuf::from(dir),
        None => match outline.parent() {
            // a bare file name has an empty parent; that means "here"
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => {
                report_error("The outline has no enclosing directory to scaffold into.");
            }
        },
    };
    if !root.is_dir() {
        report_error(&format!(
            "Project root '{}' does not exist or is not a directory.",
            root.display()
        ));
    }
    root
}

fn print_tree(tree: &Tree, format: &str, check: bool) {
    match format {
        "tree" => print!("{}", tree_text(tree)),
        "auto" if check => print!("{}", tree_text(tree)),
        "json" => {
            let rendered = serde_json::to_string_pretty(tree).unwrap_or_else(|e| {
                report_error(&format!("Error formatting tree: {}", e));
            });
            println!("{}", rendered);
        }
        "auto" | "none" => {}
        other => {
            report_error(&format!(
                "Format '{}' not supported. Available formats: tree, json, none",
                other
            ));
        }
    }
}

/// Reports the single fatal error for this run and exits.
fn report_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
