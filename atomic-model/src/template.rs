use crate::error::{AtomicError, AtomicResult};
use crate::value::CssValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A literal selector → property → value tree authored in a `rule` template.
pub type RawRule = IndexMap<String, IndexMap<String, CssValue>>;

/// One suffix/values variant of a pattern template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub suffix: String,
    pub values: Vec<CssValue>,
}

impl PatternRule {
    pub fn new(suffix: impl Into<String>, values: Vec<CssValue>) -> Self {
        Self {
            suffix: suffix.into(),
            values,
        }
    }
}

/// How automatically assigned suffixes are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixType {
    /// `a`, `b`, `c`, …
    #[default]
    Alpha,
    /// `1`, `2`, `3`, …
    Numerical,
}

/// A fraction family declared by a pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionRule {
    pub denominator: u32,
}

/// A template mapping value suffixes onto one or more CSS properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTemplate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub prefix: String,
    pub properties: Vec<String>,
    #[serde(default)]
    pub rules: Vec<PatternRule>,
    #[serde(default)]
    pub allow_custom: bool,
    #[serde(default)]
    pub allow_custom_auto_suffix: bool,
    #[serde(default)]
    pub suffix_type: SuffixType,
    /// Fraction families emitted alongside the built-in rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fractions: Vec<FractionRule>,
}

/// A template carrying a literal rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTemplate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rule: RawRule,
}

/// One catalog entry, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Template {
    Pattern(PatternTemplate),
    Rule(RuleTemplate),
}

impl Template {
    /// Parses and validates the template at `index` of an authored catalog.
    pub fn from_value(index: usize, value: &serde_json::Value) -> AtomicResult<Self> {
        let template: Template = serde_json::from_value(value.clone())
            .map_err(|e| AtomicError::at(format_args!("template[{index}]"), e))?;
        template.validate()?;
        Ok(template)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> AtomicResult<()> {
        let Self::Pattern(pattern) = self else {
            return Ok(());
        };
        if pattern.properties.is_empty() {
            return Err(AtomicError::shape(format!(
                "pattern '{}' must list at least one property",
                pattern.id
            )));
        }
        if let Some(property) = pattern.properties.iter().find(|p| p.is_empty()) {
            return Err(AtomicError::shape(format!(
                "pattern '{}' has an empty property name {property:?}",
                pattern.id
            )));
        }
        if pattern.fractions.iter().any(|f| f.denominator == 0) {
            return Err(AtomicError::shape(format!(
                "pattern '{}' has a fraction with a zero denominator",
                pattern.id
            )));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Pattern(p) => &p.id,
            Self::Rule(r) => &r.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Pattern(p) => p.name.as_deref(),
            Self::Rule(r) => r.name.as_deref(),
        }
    }

    /// The authored `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pattern(_) => "pattern",
            Self::Rule(_) => "rule",
        }
    }
}

/// The validated, ordered template catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate template ids.
    pub fn new(templates: Vec<Template>) -> AtomicResult<Self> {
        let mut seen = HashSet::with_capacity(templates.len());
        for template in &templates {
            if !seen.insert(template.id()) {
                return Err(AtomicError::DuplicateTemplate(template.id().to_string()));
            }
        }
        Ok(Self { templates })
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
