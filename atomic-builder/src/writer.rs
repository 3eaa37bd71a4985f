//! The rule writer: the only code that produces build tree entries.

use crate::constants::Constants;
use crate::escape::escape_selector;
use atomic_model::{AtomicError, AtomicResult, BuildTree, CssValue, MediaQueryTable, SelectionConfig};

/// Writes single declarations, returning each write as a delta tree.
///
/// Every selector is escaped and every value has its constants placed
/// exactly once, here.
#[derive(Debug, Clone)]
pub struct RuleWriter<'a> {
    media_queries: &'a MediaQueryTable,
    constants: Constants,
}

impl<'a> RuleWriter<'a> {
    pub fn new(media_queries: &'a MediaQueryTable, constants: Constants) -> Self {
        Self {
            media_queries,
            constants,
        }
    }

    /// A writer using the config's breakpoints and `start`/`end` literals.
    pub fn for_config(config: &'a SelectionConfig) -> Self {
        Self::new(
            config.media_queries(),
            Constants::from_settings(config.settings()),
        )
    }

    pub fn media_queries(&self) -> &MediaQueryTable {
        self.media_queries
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Writes `selector { property: value }`, plus one
    /// `selector--<bp> { @media(...) { property: value } }` per breakpoint,
    /// in the order given.
    pub fn add_css_rule(
        &self,
        selector: &str,
        property: &str,
        value: &CssValue,
        break_points: &[String],
    ) -> AtomicResult<BuildTree> {
        if selector.is_empty() {
            return Err(AtomicError::shape("selector must be a non-empty string"));
        }
        if property.is_empty() {
            return Err(AtomicError::shape(format!(
                "property for selector {selector:?} must be a non-empty string"
            )));
        }

        let escaped = escape_selector(selector);
        let value = self.constants.place_value(value);

        let queries = break_points
            .iter()
            .map(|name| {
                self.media_queries
                    .get(name)
                    .map(|query| (name, query))
                    .ok_or_else(|| AtomicError::UnknownBreakpoint(name.clone()))
            })
            .collect::<AtomicResult<Vec<_>>>()?;

        let mut delta = BuildTree::new();
        delta.insert(&escaped, property, value.clone());
        for (name, query) in queries {
            delta.insert_media(&format!("{escaped}--{name}"), query, property, value.clone());
        }
        Ok(delta)
    }
}
