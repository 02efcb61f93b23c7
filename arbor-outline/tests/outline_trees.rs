//! Tree-shape tests for whole outlines
//!
//! Each test builds a complete outline and verifies the full hierarchy via
//! the fluent assertion API: names, kinds, kind fields and child counts,
//! not just node totals.

use arbor_outline::outline::ast::Scope;
use arbor_outline::outline::error::StructureError;
use arbor_outline::outline::testing::assert_tree;
use arbor_outline::outline::{build_tree, tree_text};

#[test]
fn nested_outline_builds_the_full_hierarchy() {
    let tree = build_tree([
        "models/",
        "\tuser.py",
        "\t\tUser:",
        "\t\t\t+ str name",
        "\t\t\t+ str email()",
    ])
    .unwrap();

    assert_tree(&tree).child_count(1).child(0, |folder| {
        folder
            .is_folder()
            .named("models")
            .at_depth(1)
            .child_count(1)
            .child(0, |file| {
                file.is_file()
                    .named("user")
                    .extension("py")
                    .at_depth(2)
                    .child_count(1)
                    .child(0, |class| {
                        class
                            .is_class()
                            .named("User")
                            .at_depth(3)
                            .child_count(2)
                            .child(0, |prop| {
                                prop.named("name").at_depth(4).is_property("str", Scope::Public);
                            })
                            .child(1, |method| {
                                method
                                    .named("email")
                                    .at_depth(4)
                                    .is_method("str", "", Scope::Public);
                            });
                    });
            });
    });
}

#[test]
fn class_directly_under_root_is_rejected() {
    let err = build_tree(["User:", "\t+ str name"]).unwrap_err();
    let StructureError::IllegalChild {
        parent_kind,
        child_kind,
        child_name,
        ..
    } = err;
    assert_eq!(parent_kind, "structure");
    assert_eq!(child_kind, "class");
    assert_eq!(child_name, "User");
}

#[test]
fn depth_zero_files_are_root_siblings() {
    let tree = build_tree(["a.py", "b.py"]).unwrap();
    assert_tree(&tree)
        .child_count(2)
        .child(0, |file| {
            file.is_file().named("a").extension("py").child_count(0);
        })
        .child(1, |file| {
            file.is_file().named("b").extension("py").child_count(0);
        });
}

#[test]
fn inheritance_and_mixed_members_inside_one_file() {
    let tree = build_tree([
        "services/",
        "\tauth.py",
        "\t\tAuthService: BaseService, Loggable",
        "\t\t\t- dict cache",
        "\t\t\t# bool verify(token)",
        "\thelper",
    ])
    .unwrap();

    assert_tree(&tree).child(0, |folder| {
        folder.is_folder().named("services").child_count(2).child(0, |file| {
            file.is_file().named("auth").extension("py").child(0, |class| {
                class
                    .is_class()
                    .named("AuthService")
                    .inherits("BaseService")
                    .child_count(2)
                    .child(0, |prop| {
                        prop.named("cache").is_property("dict", Scope::Private);
                    })
                    .child(1, |method| {
                        method
                            .named("verify")
                            .is_method("bool", "token", Scope::Protected);
                    });
            });
        });
    });
}

#[test]
fn method_and_property_directly_inside_a_file() {
    // module-level members: legal without an enclosing class
    let tree = build_tree(["util.py", "\t+ int add(a, b)", "\t- str prefix"]).unwrap();
    assert_tree(&tree).child(0, |file| {
        file.is_file()
            .named("util")
            .child_count(2)
            .child(0, |method| {
                method.named("add").is_method("int", "a, b", Scope::Public);
            })
            .child(1, |prop| {
                prop.named("prefix").is_property("str", Scope::Private);
            });
    });
}

#[test]
fn folder_inside_a_file_is_rejected() {
    let err = build_tree(["config.py", "\tnested/"]).unwrap_err();
    let StructureError::IllegalChild {
        parent_kind,
        parent_name,
        child_kind,
        child_name,
    } = err;
    assert_eq!((parent_kind, parent_name.as_str()), ("file", "config"));
    assert_eq!((child_kind, child_name.as_str()), ("folder", "nested"));
}

#[test]
fn rendered_text_round_trips_as_a_valid_outline() {
    // the renderer's folder and file spellings are themselves outline lines,
    // so rendering and reparsing the filesystem kinds reproduces the shape
    let tree = build_tree(["src/", "\tmain.rs", "assets/"]).unwrap();
    let rendered = tree_text(&tree);
    assert_eq!(rendered, "src/\n  main.rs\nassets/\n");
}
