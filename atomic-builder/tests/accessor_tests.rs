mod common;

use atomic_builder::{AtomicBuilder, Build};
use atomic_model::{BuildTree, CssValue};
use common::sample_templates;
use pretty_assertions::assert_eq;
use serde_json::json;

fn small_tree() -> BuildTree {
    let mut tree = BuildTree::new();
    tree.insert(".Fw-b", "font-weight", CssValue::from("bold"));
    tree
}

#[test]
fn namespace_wraps_the_tree() {
    let build = Build::new(small_tree(), Some(".baz".into()));
    assert_eq!(
        build.get_build().unwrap(),
        json!({".baz": {".Fw-b": {"font-weight": "bold"}}})
    );
    assert_eq!(build.namespace(), Some(".baz"));
}

#[test]
fn no_namespace_returns_the_bare_tree() {
    let build = Build::new(small_tree(), None);
    assert_eq!(
        build.get_build().unwrap(),
        json!({".Fw-b": {"font-weight": "bold"}})
    );
}

#[test]
fn tree_is_never_wrapped() {
    let build = Build::new(small_tree(), Some(".baz".into()));
    assert_eq!(build.tree(), &small_tree());
    assert_eq!(build.into_tree(), small_tree());
}

#[test]
fn flush_empties_the_tree_and_keeps_the_namespace() {
    let mut build = Build::new(small_tree(), Some(".baz".into()));
    build.flush();
    assert!(build.is_empty());
    assert_eq!(build.tree().len(), 0);
    assert_eq!(build.get_build().unwrap(), json!({".baz": {}}));
}

#[test]
fn empty_build_serializes_to_empty_object() {
    assert_eq!(Build::default().get_build().unwrap(), json!({}));
}

#[test]
fn flushing_one_build_does_not_affect_the_next_expansion() {
    let builder = AtomicBuilder::new(
        &sample_templates(),
        &json!({"config": {"namespace": ".baz"}, "font-weight": {"b": true}}),
    )
    .unwrap();

    let mut first = builder.expand().unwrap();
    first.flush();
    assert!(first.is_empty());

    let second = builder.expand().unwrap();
    assert_eq!(
        second.get_build().unwrap(),
        json!({".baz": {".Fw-b": {"font-weight": "bold"}}})
    );
}

#[test]
fn media_blocks_serialize_after_declarations() {
    let mut tree = BuildTree::new();
    tree.insert_media(".Fw-b--sm", "@media(min-width:100px)", "font-weight", CssValue::from("bold"));
    tree.insert(".Fw-b--sm", "color", CssValue::from("red"));
    let build = Build::new(tree, None);
    let json = serde_json::to_string(&build).unwrap();
    assert_eq!(
        json,
        r#"{".Fw-b--sm":{"color":"red","@media(min-width:100px)":{"font-weight":"bold"}}}"#
    );
}
