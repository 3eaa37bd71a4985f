mod common;

use atomic_builder::{AtomicError, CatalogLoader, ConfigLoader, ErrorKind, JsonCatalogLoader, JsonConfigLoader};
use atomic_model::Selection;
use common::{init_tracing, sample_templates};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// ── Catalog loader ───────────────────────────────────────────────

#[test]
fn catalog_missing_is_an_argument_error() {
    let err = JsonCatalogLoader.load_catalog(&Value::Null).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn catalog_empty_is_an_argument_error() {
    let err = JsonCatalogLoader.load_catalog(&json!([])).unwrap_err();
    assert!(matches!(err, AtomicError::MissingArgument(_)));
}

#[test]
fn catalog_non_array_is_a_shape_error() {
    for input in [json!("foo"), json!(42), json!({"id": "foo"}), json!(true)] {
        let err = JsonCatalogLoader.load_catalog(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape, "input: {input}");
    }
}

#[test]
fn catalog_stores_templates_in_order() {
    init_tracing();
    let catalog = JsonCatalogLoader.load_catalog(&sample_templates()).unwrap();
    let ids: Vec<_> = catalog.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["font-weight", "padding-x", "float", "width", "clearfix"]);
}

#[test]
fn catalog_round_trips_authored_fields() {
    let templates = json!([{
        "type": "pattern",
        "id": "padding-x",
        "name": "Horizontal padding",
        "prefix": ".Px-",
        "allowCustom": true,
        "properties": ["padding-left", "padding-right"]
    }]);
    let catalog = JsonCatalogLoader.load_catalog(&templates).unwrap();
    let stored = serde_json::to_value(&catalog).unwrap();
    assert_eq!(stored[0]["id"], "padding-x");
    assert_eq!(stored[0]["name"], "Horizontal padding");
    assert_eq!(stored[0]["allowCustom"], true);
    assert_eq!(stored[0]["properties"], json!(["padding-left", "padding-right"]));
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let templates = json!([
        {"type": "rule", "id": "foo", "rule": {}},
        {"type": "rule", "id": "foo", "rule": {}}
    ]);
    let err = JsonCatalogLoader.load_catalog(&templates).unwrap_err();
    assert!(matches!(err, AtomicError::DuplicateTemplate(_)));
}

#[test]
fn catalog_reports_first_bad_template() {
    let templates = json!([
        {"type": "rule", "id": "ok", "rule": {}},
        {"type": "pattern", "id": "bad", "prefix": ".B-"}
    ]);
    let err = JsonCatalogLoader.load_catalog(&templates).unwrap_err();
    assert!(format!("{err}").contains("template[1]"));
}

// ── Config loader ────────────────────────────────────────────────

#[test]
fn config_missing_is_an_argument_error() {
    let err = JsonConfigLoader.load_config(&Value::Null).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn config_non_object_is_a_shape_error() {
    let err = JsonConfigLoader.load_config(&json!("foo")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    let err = JsonConfigLoader.load_config(&json!(["foo"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn config_without_config_key_is_a_shape_error() {
    let err = JsonConfigLoader.load_config(&json!({})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert!(format!("{err}").contains("`config`"));
}

#[test]
fn break_points_array_is_a_shape_error() {
    let err = JsonConfigLoader
        .load_config(&json!({"config": {"breakPoints": []}}))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn unrecognized_break_points_are_a_config_error() {
    let err = JsonConfigLoader
        .load_config(&json!({"config": {"breakPoints": {"foo": "bar"}}}))
        .unwrap_err();
    assert!(matches!(err, AtomicError::NoRecognizedBreakpoint));
    assert!(err.is_config_violation());
}

#[test]
fn config_stores_settings_and_selections() {
    init_tracing();
    let config = JsonConfigLoader
        .load_config(&json!({
            "config": {
                "namespace": "#atomic",
                "start": "left",
                "end": "right",
                "defaults": {
                    "font-size": "16px",
                    "border-color": "#555",
                    "bleed-value": "-10px"
                }
            },
            "font-weight": {"n": true, "b": true},
            "clearfix": true,
            "border": false
        }))
        .unwrap();

    assert_eq!(config.namespace(), Some("#atomic"));
    assert_eq!(config.settings().start(), "left");
    assert_eq!(config.settings().end(), "right");
    assert_eq!(config.settings().defaults.len(), 3);
    assert_eq!(config.selection("clearfix"), Some(&Selection::Enabled(true)));
    assert_eq!(config.selection("border"), Some(&Selection::Enabled(false)));
    assert!(config.selection("font-weight").unwrap().wants_suffix("b"));
    assert!(config.selection("config").is_none());
    assert!(config.media_queries().is_empty());
}

#[test]
fn config_derives_media_queries() {
    let config = JsonConfigLoader
        .load_config(&json!({
            "config": {"breakPoints": {"sm": "200px", "md": "300px", "lg": "500px"}}
        }))
        .unwrap();
    assert_eq!(
        serde_json::to_value(config.media_queries()).unwrap(),
        json!({
            "sm": "@media(min-width:200px)",
            "md": "@media(min-width:300px)",
            "lg": "@media(min-width:500px)"
        })
    );
}

#[test]
fn settings_with_wrong_types_are_shape_errors() {
    let err = JsonConfigLoader
        .load_config(&json!({"config": {"namespace": 12}}))
        .unwrap_err();
    assert!(err.is_shape_violation());
    assert!(format!("{err}").contains("config"));
}

#[test]
fn selection_naming_unknown_breakpoint_is_a_config_error() {
    let err = JsonConfigLoader
        .load_config(&json!({
            "config": {"breakPoints": {"sm": "200px"}},
            "font-weight": {"b": true, "breakPoints": ["lg"]}
        }))
        .unwrap_err();
    assert!(matches!(err, AtomicError::UnknownBreakpoint(ref name) if name == "lg"));
}
