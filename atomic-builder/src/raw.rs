//! Literal rule trees from `rule` templates.

use crate::writer::RuleWriter;
use atomic_model::{AtomicError, AtomicResult, BuildTree, RawRule, Selection};
use tracing::debug;

impl RuleWriter<'_> {
    /// Writes every leaf of `rule` when the config enables `id`.
    ///
    /// Selectors are taken as authored. Only a boolean selection is
    /// accepted for rule templates.
    pub fn add_rule(
        &self,
        rule: &RawRule,
        id: &str,
        selection: Option<&Selection>,
    ) -> AtomicResult<BuildTree> {
        match selection {
            Some(Selection::Enabled(true)) => {}
            Some(Selection::Detailed(_)) => {
                return Err(AtomicError::UnsupportedRuleSelection(id.to_string()));
            }
            Some(Selection::Enabled(false)) | None => {
                debug!(template = %id, "Rule not selected, skipping");
                return Ok(BuildTree::new());
            }
        }

        rule.iter()
            .flat_map(|(selector, declarations)| {
                declarations
                    .iter()
                    .map(move |(property, value)| (selector, property, value))
            })
            .map(|(selector, property, value)| self.add_css_rule(selector, property, value, &[]))
            .collect()
    }
}
