//! The builder engine: loads a catalog and config once, expands on demand.

use crate::accessor::Build;
use crate::driver::{ExpansionDriver, TemplateExpander};
use crate::loader::{CatalogLoader, ConfigLoader, JsonCatalogLoader, JsonConfigLoader};
use atomic_model::{AtomicResult, Catalog, MediaQueryTable, SelectionConfig};
use serde_json::Value;
use std::fmt;
use tracing::info;

/// A loaded catalog and config, ready to expand.
///
/// Construction only validates and stores its inputs; [`AtomicBuilder::expand`]
/// performs the expansion and may be called any number of times.
pub struct AtomicBuilder {
    catalog: Catalog,
    config: SelectionConfig,
    driver: Box<dyn ExpansionDriver>,
}

impl AtomicBuilder {
    /// Loads JSON templates and config with the default strategies.
    pub fn new(templates: &Value, config: &Value) -> AtomicResult<Self> {
        Self::with_strategies(
            templates,
            config,
            &JsonCatalogLoader,
            &JsonConfigLoader,
            Box::new(TemplateExpander),
        )
    }

    /// Loads with caller-supplied strategies.
    pub fn with_strategies(
        templates: &Value,
        config: &Value,
        catalog_loader: &dyn CatalogLoader,
        config_loader: &dyn ConfigLoader,
        driver: Box<dyn ExpansionDriver>,
    ) -> AtomicResult<Self> {
        let catalog = catalog_loader.load_catalog(templates)?;
        let config = config_loader.load_config(config)?;
        Ok(Self {
            catalog,
            config,
            driver,
        })
    }

    /// Wraps an already validated catalog and config.
    pub fn from_parts(catalog: Catalog, config: SelectionConfig) -> Self {
        Self {
            catalog,
            config,
            driver: Box::new(TemplateExpander),
        }
    }

    /// Replaces the expansion driver.
    #[must_use]
    pub fn with_driver(mut self, driver: Box<dyn ExpansionDriver>) -> Self {
        self.driver = driver;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn media_queries(&self) -> &MediaQueryTable {
        self.config.media_queries()
    }

    /// Runs a full expansion pass and returns its build.
    pub fn expand(&self) -> AtomicResult<Build> {
        let tree = self.driver.expand(&self.catalog, &self.config)?;
        info!(
            selectors = tree.len(),
            namespace = self.config.namespace().unwrap_or(""),
            "Build ready"
        );
        Ok(Build::new(
            tree,
            self.config.namespace().map(str::to_string),
        ))
    }
}

impl fmt::Debug for AtomicBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBuilder")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
