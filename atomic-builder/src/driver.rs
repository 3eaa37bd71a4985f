//! The expansion driver: walks the catalog and dispatches each template to
//! the matching expander.

use crate::pattern::{PatternFields, ValueSelection};
use crate::writer::RuleWriter;
use atomic_model::{
    AtomicError, AtomicResult, BuildTree, Catalog, PatternRule, PatternTemplate, Selection,
    SelectionConfig, SuffixType, Template,
};
use tracing::{debug, info};

/// Strategy that turns a catalog and config into a build tree.
pub trait ExpansionDriver: Send + Sync {
    fn expand(&self, catalog: &Catalog, config: &SelectionConfig) -> AtomicResult<BuildTree>;
}

/// The `n`th (zero-based) automatic suffix.
///
/// Alpha suffixes run `a … z, aa, ab, …`; numerical ones `1, 2, 3, …`.
pub fn auto_suffix(suffix_type: SuffixType, index: usize) -> String {
    match suffix_type {
        SuffixType::Numerical => (index + 1).to_string(),
        SuffixType::Alpha => {
            let mut letters = Vec::new();
            let mut n = index + 1;
            while n > 0 {
                n -= 1;
                letters.push(b'a' + (n % 26) as u8);
                n /= 26;
            }
            letters.iter().rev().map(|&b| char::from(b)).collect()
        }
    }
}

/// The default driver.
///
/// Templates never read each other's output, so each one expands into its
/// own delta and the deltas are folded in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExpander;

impl TemplateExpander {
    /// Expands a single template against its selection.
    pub fn expand_template(
        &self,
        writer: &RuleWriter<'_>,
        template: &Template,
        selection: Option<&Selection>,
    ) -> AtomicResult<BuildTree> {
        match template {
            Template::Rule(rule) => writer.add_rule(&rule.rule, &rule.id, selection),
            Template::Pattern(pattern) => match selection {
                Some(selection) if selection.is_enabled() => {
                    self.expand_pattern(writer, pattern, selection)
                }
                _ => {
                    debug!(template = %pattern.id, "Pattern not selected, skipping");
                    Ok(BuildTree::new())
                }
            },
        }
    }

    fn expand_pattern(
        &self,
        writer: &RuleWriter<'_>,
        pattern: &PatternTemplate,
        selection: &Selection,
    ) -> AtomicResult<BuildTree> {
        let fields = PatternFields::from(pattern);
        let break_points = selection.break_points();
        let mut delta = BuildTree::new();

        for rule in pattern
            .rules
            .iter()
            .filter(|rule| selection.wants_suffix(&rule.suffix))
        {
            delta.merge(writer.add_pattern_rule(rule, &fields, ValueSelection::Own, break_points)?);
        }

        if let Some(detail) = selection.as_detailed() {
            if detail.custom.is_some() && !pattern.allow_custom {
                return Err(AtomicError::CustomNotAllowed(pattern.id.clone()));
            }
            if let Some(custom) = detail.custom_rules(&pattern.id)? {
                for rule in &custom {
                    delta.merge(writer.add_pattern_rule(
                        rule,
                        &fields,
                        ValueSelection::Override(&rule.values),
                        break_points,
                    )?);
                }
            }

            if detail.custom_auto_suffix.is_some() && !pattern.allow_custom_auto_suffix {
                return Err(AtomicError::AutoSuffixNotAllowed(pattern.id.clone()));
            }
            if let Some(entries) = detail.auto_suffix_entries(&pattern.id)? {
                for (index, entry) in entries.iter().enumerate() {
                    let rule = PatternRule::new(
                        auto_suffix(pattern.suffix_type, index),
                        entry.values.clone(),
                    );
                    delta.merge(writer.add_pattern_rule(
                        &rule,
                        &fields,
                        ValueSelection::Own,
                        break_points,
                    )?);
                }
            }

            if detail.fractions && pattern.fractions.is_empty() {
                return Err(AtomicError::FractionsNotAllowed(pattern.id.clone()));
            }
        }

        if selection.wants_fractions() {
            for fraction in &pattern.fractions {
                delta.merge(writer.add_fraction_rules(fraction, &fields, break_points)?);
            }
        }

        Ok(delta)
    }
}

impl ExpansionDriver for TemplateExpander {
    fn expand(&self, catalog: &Catalog, config: &SelectionConfig) -> AtomicResult<BuildTree> {
        let writer = RuleWriter::for_config(config);
        let tree = catalog
            .iter()
            .map(|template| {
                debug!(template = %template.id(), kind = template.kind(), "Expanding template");
                self.expand_template(&writer, template, config.selection(template.id()))
            })
            .collect::<AtomicResult<BuildTree>>()?;

        info!(
            templates = catalog.len(),
            selectors = tree.len(),
            declarations = tree.declaration_count(),
            "Expansion complete"
        );
        Ok(tree)
    }
}
