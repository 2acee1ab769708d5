//! Parsing behavior over whole documents

use attrdoc::attrdoc::parsing::{parse_document, parse_reader, parse_with_diagnostics, DiagnosticKind};
use attrdoc::attrdoc::testing::assert_tree;
use rstest::rstest;
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

#[rstest]
#[case("\\tag value", "tag", "value")]
#[case("\\fn get", "fn", "get")]
#[case("\\h1 A longer title", "h1", "A longer title")]
#[case("\\x_2 y", "x_2", "y")]
fn single_line_declarations(#[case] line: &str, #[case] tag: &str, #[case] value: &str) {
    let root = parse_document(line);
    assert_tree(&root)
        .child_count(1)
        .child(0, |node| node.tag(tag).value(value).leaf());
}

#[test]
fn indentation_decides_nesting() {
    let root = parse_document("  \\one\n    \\two\n    \\three\n  \\four\n");
    assert_tree(&root)
        .child_tags(&["one", "four"])
        .child(0, |one| one.child_tags(&["two", "three"]))
        .child(1, |four| four.leaf());
}

#[test]
fn deeper_indentation_closes_back_to_the_matching_level() {
    let root = parse_document("\\a\n  \\b\n    \\c\n  \\d\n\\e\n");
    assert_tree(&root)
        .child_tags(&["a", "e"])
        .child(0, |a| {
            a.child_tags(&["b", "d"])
                .child(0, |b| b.child_tags(&["c"]))
        });
}

#[rstest]
#[case(4)]
#[case(6)]
#[case(12)]
fn uniform_reindentation_is_stripped(#[case] width: usize) {
    let block = "first line\n  indented more\n\nlast line";
    let pad = " ".repeat(width);
    let body: Vec<String> = block
        .lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{pad}{line}") })
        .collect();
    let source = format!("\\desc\n{}\n", body.join("\n"));

    let root = parse_document(&source);
    assert_tree(&root).child(0, |desc| desc.value(block));
}

#[test]
fn blank_lines_are_preserved_between_content_only() {
    let root = parse_document("\\p\n\n    a\n\n\n    b\n\n\n");
    assert_tree(&root).child(0, |p| p.value("a\n\n\nb"));
}

#[test]
fn inline_marker_splits_body_text() {
    let root = parse_document("\\arg\n    text \\type= int more\n");
    assert_tree(&root).child(0, |arg| {
        arg.value("text")
            .child_tags(&["type"])
            .attribute("type", |ty| ty.value("int more").leaf())
    });
}

#[test]
fn text_after_a_marker_keeps_flowing_into_the_new_child() {
    let root = parse_document("\\arg x \\desc= first\n    second\n");
    assert_tree(&root).child(0, |arg| {
        arg.value("x")
            .attribute("desc", |desc| desc.value("first\nsecond"))
    });
}

#[test]
fn several_markers_open_siblings() {
    let root = parse_document("\\arg n \\type= int \\default= 0\n");
    assert_tree(&root).child(0, |arg| {
        arg.value("n")
            .child_tags(&["type", "default"])
            .attribute("type", |t| t.value("int"))
            .attribute("default", |d| d.value("0"))
    });
}

#[test]
fn doubled_escape_is_literal_text() {
    let root = parse_document("\\p a \\\\type= b\n");
    assert_tree(&root).child(0, |p| p.value("a \\type= b").leaf());
}

#[rstest]
#[case("\\desc\n    \\\\fn x\n", "\\fn x")]
#[case("\\desc\n    code:\n      \\\\fn x\n", "code:\n  \\fn x")]
fn escaped_tag_in_body_loses_one_escape(#[case] source: &str, #[case] value: &str) {
    let root = parse_document(source);
    assert_tree(&root).child(0, |desc| desc.tag("desc").value(value).leaf());
}

#[test]
fn lone_tag_line_without_body_has_no_value() {
    let root = parse_document("\\static\n\\p\n\n");
    assert_tree(&root)
        .child(0, |s| s.no_value())
        .child(1, |p| p.no_value());
}

#[test]
fn lookups_follow_document_order() {
    let root = parse_document("\\fn f\n    \\arg a\n    \\desc d\n    \\arg b\n");
    let f = root.get_attribute("fn").unwrap();
    assert_eq!(f.get_attribute("arg").unwrap().get_value(), "a");
    let args: Vec<_> = f.get_attributes("arg").iter().map(|a| a.get_value()).collect();
    assert_eq!(args, vec!["a", "b"]);
    assert!(f.get_attribute("missing").is_none());
    assert!(f.get_attributes("missing").is_empty());
}

#[test]
fn containers_fixture_shape() {
    let root = parse_document(&fixture("containers.adoc"));
    assert_tree(&root)
        .child_tags(&["h1", "p", "h4", "fn", "note", "fn", "member", "h6", "p", "p"])
        .child(1, |p| p.value("Generic containers with <em>checked</em> access."))
        .child(3, |f| {
            f.value("get")
                .child_tags(&["obj", "obj_template", "obj_template", "return", "arg", "desc"])
                .attribute("return", |r| {
                    r.value("const V&")
                        .attribute("desc", |d| d.value("The stored value."))
                })
                .attribute("arg", |arg| {
                    arg.value("key")
                        .child_tags(&["type", "desc"])
                        .attribute("type", |t| t.value("const K&"))
                })
                .attribute("desc", |d| {
                    d.value("Returns the value stored under a key.\n\nPanics if the key is absent.")
                })
        })
        .child(5, |f| {
            f.child(2, |arg| {
                arg.value("fallback")
                    .child_tags(&["type", "default"])
                    .attribute("default", |d| d.value("V()"))
            })
        })
        .child(8, |p| p.value("Write \\fn= to document a tag."))
        .child(9, |p| p.value("\\p looks like a tag but is text."));
}

#[test]
fn reader_and_string_agree_on_fixture() {
    let source = fixture("containers.adoc");
    let file = fs::File::open(fixture_path("containers.adoc")).unwrap();
    let from_reader = parse_reader(BufReader::new(file)).unwrap();
    assert_eq!(from_reader, parse_document(&source));
}

#[test]
fn degraded_fixture_still_parses() {
    let outcome = parse_with_diagnostics(&fixture("degraded.adoc"));
    assert_tree(&outcome.root)
        .value("Text before any tag.")
        .child_tags(&["p", "p"])
        .child(0, |p| p.value("indented body\nshallower body"))
        .child(1, |p| p.value("see \\ref for details"));

    let kinds: Vec<_> = outcome.diagnostics.iter().map(|d| d.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::DetachedText,
            DiagnosticKind::UnderIndented {
                expected: 4,
                found: 2
            },
            DiagnosticKind::UnterminatedMarker {
                tag: "ref".to_string()
            },
        ]
    );
    let lines: Vec<_> = outcome.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 4, 5]);
}
