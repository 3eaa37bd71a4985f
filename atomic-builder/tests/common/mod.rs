//! Shared fixtures for builder tests.

#![allow(dead_code)]

use atomic_model::{FractionRule, SelectionConfig};
use atomic_builder::{ConfigLoader, JsonConfigLoader};
use serde_json::{json, Value};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once per test binary. Set `RUST_LOG` to see output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A small catalog touching every template kind.
pub fn sample_templates() -> Value {
    json!([
        {
            "type": "pattern",
            "id": "font-weight",
            "name": "Font weight",
            "prefix": ".Fw-",
            "properties": ["font-weight"],
            "allowCustom": true,
            "allowCustomAutoSuffix": true,
            "rules": [
                {"suffix": "n", "values": ["normal"]},
                {"suffix": "b", "values": ["bold"]}
            ]
        },
        {
            "type": "pattern",
            "id": "padding-x",
            "name": "Horizontal padding",
            "prefix": ".Px-",
            "properties": ["padding-left", "padding-right"],
            "rules": [
                {"suffix": "0", "values": ["0"]},
                {"suffix": "s", "values": ["5px", "10px"]}
            ]
        },
        {
            "type": "pattern",
            "id": "float",
            "prefix": ".Fl-",
            "properties": ["float"],
            "rules": [
                {"suffix": "start", "values": ["$START"]},
                {"suffix": "end", "values": ["$END"]}
            ]
        },
        {
            "type": "pattern",
            "id": "width",
            "prefix": ".W-",
            "properties": ["width"],
            "fractions": [{"denominator": 2}]
        },
        {
            "type": "rule",
            "id": "clearfix",
            "rule": {
                ".Cf": {"display": "table", "clear": "both"}
            }
        }
    ])
}

pub fn width_fraction(denominator: u32) -> FractionRule {
    FractionRule { denominator }
}

/// Loads `config` with the default loader, panicking on error.
pub fn load_config(config: Value) -> SelectionConfig {
    JsonConfigLoader.load_config(&config).unwrap()
}

/// Config with `sm`/`md`/`lg` at 100/200/300px and the given selections.
pub fn config_with_break_points(selections: Value) -> SelectionConfig {
    let mut config = json!({
        "config": {
            "breakPoints": {"sm": "100px", "md": "200px", "lg": "300px"}
        }
    });
    if let (Some(map), Value::Object(extra)) = (config.as_object_mut(), selections) {
        map.extend(extra);
    }
    load_config(config)
}
