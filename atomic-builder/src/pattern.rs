//! Pattern expansion: one suffix/values rule across a template's properties.

use crate::writer::RuleWriter;
use atomic_model::{AtomicError, AtomicResult, BuildTree, CssValue, PatternRule, PatternTemplate};

/// The fields of a pattern template the expanders need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFields<'a> {
    pub id: &'a str,
    pub prefix: &'a str,
    pub properties: &'a [String],
}

impl PatternFields<'_> {
    pub(crate) fn validate(&self) -> AtomicResult<()> {
        if self.properties.is_empty() {
            return Err(AtomicError::shape(format!(
                "pattern '{}' must list at least one property",
                self.id
            )));
        }
        Ok(())
    }
}

impl<'a> From<&'a PatternTemplate> for PatternFields<'a> {
    fn from(template: &'a PatternTemplate) -> Self {
        Self {
            id: &template.id,
            prefix: &template.prefix,
            properties: &template.properties,
        }
    }
}

/// Where a pattern rule takes its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSelection<'a> {
    /// The rule's own `values`.
    Own,
    /// Values supplied by the config, used verbatim instead.
    Override(&'a [CssValue]),
}

impl RuleWriter<'_> {
    /// Writes `prefix + suffix` for every property of the pattern.
    ///
    /// Property `i` receives value `i % values.len()`, so a single value is
    /// shared by all properties and equal counts pair up one to one.
    pub fn add_pattern_rule(
        &self,
        rule: &PatternRule,
        fields: &PatternFields<'_>,
        selection: ValueSelection<'_>,
        break_points: &[String],
    ) -> AtomicResult<BuildTree> {
        fields.validate()?;

        let values = match selection {
            ValueSelection::Own => rule.values.as_slice(),
            ValueSelection::Override(values) => values,
        };
        if values.is_empty() {
            return Err(AtomicError::shape(format!(
                "rule '{}' of pattern '{}' has no values",
                rule.suffix, fields.id
            )));
        }

        let selector = format!("{}{}", fields.prefix, rule.suffix);
        fields
            .properties
            .iter()
            .enumerate()
            .map(|(i, property)| {
                self.add_css_rule(&selector, property, &values[i % values.len()], break_points)
            })
            .collect()
    }
}
