//! Catalog and config loading strategies.
//!
//! The builder takes its loaders as trait objects so callers (and tests)
//! can substitute their own without touching the engine.

use atomic_model::{
    AtomicError, AtomicResult, Catalog, GlobalSettings, Selection, SelectionConfig, SETTINGS_KEY,
    Template,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

/// Validates and stores the template catalog.
pub trait CatalogLoader {
    fn load_catalog(&self, templates: &Value) -> AtomicResult<Catalog>;
}

/// Validates and stores the selection config.
pub trait ConfigLoader {
    fn load_config(&self, config: &Value) -> AtomicResult<SelectionConfig>;
}

/// Loads a catalog from a JSON array of templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCatalogLoader;

impl CatalogLoader for JsonCatalogLoader {
    fn load_catalog(&self, templates: &Value) -> AtomicResult<Catalog> {
        let entries = match templates {
            Value::Null => return Err(AtomicError::MissingArgument("templates".into())),
            Value::Array(entries) => entries,
            other => {
                return Err(AtomicError::shape(format!(
                    "templates must be an array, got {other}"
                )));
            }
        };
        if entries.is_empty() {
            return Err(AtomicError::MissingArgument("templates (empty list)".into()));
        }

        let templates = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Template::from_value(index, entry))
            .collect::<AtomicResult<Vec<_>>>()?;
        let catalog = Catalog::new(templates)?;

        info!(templates = catalog.len(), "Loaded template catalog");
        Ok(catalog)
    }
}

/// Loads a selection config from a JSON object with a `config` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigLoader;

impl ConfigLoader for JsonConfigLoader {
    fn load_config(&self, config: &Value) -> AtomicResult<SelectionConfig> {
        let map = match config {
            Value::Null => return Err(AtomicError::MissingArgument("config".into())),
            Value::Object(map) => map,
            other => {
                return Err(AtomicError::shape(format!(
                    "config must be an object, got {other}"
                )));
            }
        };

        let settings_value = map.get(SETTINGS_KEY).ok_or_else(|| {
            AtomicError::shape(format!("config must have a `{SETTINGS_KEY}` key"))
        })?;
        let settings: GlobalSettings = serde_json::from_value(settings_value.clone())
            .map_err(|e| AtomicError::at(SETTINGS_KEY, e))?;

        let selections = map
            .iter()
            .filter(|(id, _)| id.as_str() != SETTINGS_KEY)
            .map(|(id, value)| Ok((id.clone(), Selection::from_value(id, value)?)))
            .collect::<AtomicResult<IndexMap<_, _>>>()?;

        let config = SelectionConfig::new(settings, selections)?;
        info!(
            selections = config.selections().count(),
            breakpoints = config.media_queries().len(),
            namespace = config.namespace().unwrap_or(""),
            "Loaded selection config"
        );
        Ok(config)
    }
}
