//! Selection config: which templates and variants to emit, plus the global
//! settings block found under the top-level `config` key.

use crate::error::{AtomicError, AtomicResult};
use crate::template::PatternRule;
use crate::value::CssValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Breakpoint names the builder knows how to use.
pub const RECOGNIZED_BREAKPOINTS: [&str; 3] = ["sm", "md", "lg"];

/// Top-level key holding [`GlobalSettings`].
pub const SETTINGS_KEY: &str = "config";

const CUSTOM_KEY: &str = "custom";
const AUTO_SUFFIX_KEY: &str = "custom-auto-suffix";
const BREAK_POINTS_KEY: &str = "breakPoints";
const FRACTIONS_KEY: &str = "fractions";

/// Settings under the top-level `config` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Selector wrapping the whole build, e.g. `#atomic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Right-to-left output. Only affects the default `start`/`end`.
    #[serde(default)]
    pub rtl: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Stored verbatim; the builder does not read it.
    #[serde(default)]
    pub defaults: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_points: Option<IndexMap<String, String>>,
}

impl GlobalSettings {
    /// Literal substituted for `$START`.
    pub fn start(&self) -> &str {
        match &self.start {
            Some(start) => start,
            None if self.rtl => "right",
            None => "left",
        }
    }

    /// Literal substituted for `$END`.
    pub fn end(&self) -> &str {
        match &self.end {
            Some(end) => end,
            None if self.rtl => "left",
            None => "right",
        }
    }
}

/// Breakpoint name → `@media(min-width:<width>)`, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MediaQueryTable(IndexMap<String, String>);

impl MediaQueryTable {
    /// Derives the table from a `breakPoints` map.
    ///
    /// At least one of `sm`, `md` or `lg` must be present. Other names are
    /// kept but logged.
    pub fn from_break_points(break_points: &IndexMap<String, String>) -> AtomicResult<Self> {
        if !RECOGNIZED_BREAKPOINTS
            .iter()
            .any(|name| break_points.contains_key(*name))
        {
            return Err(AtomicError::NoRecognizedBreakpoint);
        }

        let mut table = IndexMap::with_capacity(break_points.len());
        for (name, width) in break_points {
            if !RECOGNIZED_BREAKPOINTS.contains(&name.as_str()) {
                warn!(breakpoint = %name, "Unrecognized breakpoint name");
            }
            table.insert(name.clone(), format!("@media(min-width:{width})"));
        }
        Ok(Self(table))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A `custom-auto-suffix` entry: values only, the suffix is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSuffixEntry {
    pub values: Vec<CssValue>,
}

/// The object form of a template selection.
///
/// `custom` and `custom-auto-suffix` stay as authored until the driver has
/// checked that the template allows them; see [`PatternSelection::custom_rules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSelection {
    /// Per-suffix flags for built-in rules.
    pub suffixes: IndexMap<String, bool>,
    pub custom: Option<Value>,
    pub custom_auto_suffix: Option<Value>,
    /// Breakpoints receiving responsive variants of every emitted rule.
    pub break_points: Vec<String>,
    pub fractions: bool,
}

impl PatternSelection {
    /// Parses `custom` for template `id`. `None` when absent.
    pub fn custom_rules(&self, id: &str) -> AtomicResult<Option<Vec<PatternRule>>> {
        self.custom
            .as_ref()
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| AtomicError::at(format_args!("config[{id:?}][{CUSTOM_KEY:?}]"), e))
            })
            .transpose()
    }

    /// Parses `custom-auto-suffix` for template `id`. `None` when absent.
    pub fn auto_suffix_entries(&self, id: &str) -> AtomicResult<Option<Vec<AutoSuffixEntry>>> {
        self.custom_auto_suffix
            .as_ref()
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| {
                    AtomicError::at(format_args!("config[{id:?}][{AUTO_SUFFIX_KEY:?}]"), e)
                })
            })
            .transpose()
    }
}

/// What the config asks for a single template id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `true` emits every built-in variant, `false` nothing.
    Enabled(bool),
    Detailed(PatternSelection),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl Selection {
    /// Parses `config[id]`.
    pub fn from_value(id: &str, value: &Value) -> AtomicResult<Self> {
        let map = match value {
            Value::Null => return Ok(Self::Enabled(false)),
            Value::Bool(flag) => return Ok(Self::Enabled(*flag)),
            Value::Object(map) => map,
            other => {
                return Err(AtomicError::shape(format!(
                    "config[{id:?}] must be a boolean or an object, got {other}"
                )));
            }
        };

        let mut selection = PatternSelection::default();
        for (key, entry) in map {
            let location = format!("config[{id:?}][{key:?}]");
            match key.as_str() {
                // Shape checked later, after the template's allow flag.
                CUSTOM_KEY => selection.custom = Some(entry.clone()),
                AUTO_SUFFIX_KEY => selection.custom_auto_suffix = Some(entry.clone()),
                BREAK_POINTS_KEY => {
                    selection.break_points = serde_json::from_value(entry.clone())
                        .map_err(|e| AtomicError::at(&location, e))?;
                }
                FRACTIONS_KEY => {
                    selection.fractions = entry.as_bool().ok_or_else(|| {
                        AtomicError::shape(format!("{location} must be a boolean"))
                    })?;
                }
                // Flags are strict booleans; `1` or `"yes"` is a shape error.
                suffix => {
                    let flag = entry.as_bool().ok_or_else(|| {
                        AtomicError::shape(format!("{location} must be a boolean"))
                    })?;
                    selection.suffixes.insert(suffix.to_string(), flag);
                }
            }
        }
        Ok(Self::Detailed(selection))
    }

    /// True unless the selection is `false`.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Enabled(false))
    }

    /// Whether the built-in rule with `suffix` should be emitted.
    pub fn wants_suffix(&self, suffix: &str) -> bool {
        match self {
            Self::Enabled(flag) => *flag,
            Self::Detailed(detail) => detail.suffixes.get(suffix).copied().unwrap_or(false),
        }
    }

    /// Whether declared fractions should be emitted.
    pub fn wants_fractions(&self) -> bool {
        match self {
            Self::Enabled(flag) => *flag,
            Self::Detailed(detail) => detail.fractions,
        }
    }

    pub fn break_points(&self) -> &[String] {
        match self {
            Self::Enabled(_) => &[],
            Self::Detailed(detail) => &detail.break_points,
        }
    }

    pub fn as_detailed(&self) -> Option<&PatternSelection> {
        match self {
            Self::Detailed(detail) => Some(detail),
            Self::Enabled(_) => None,
        }
    }
}

/// The validated selection config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    settings: GlobalSettings,
    selections: IndexMap<String, Selection>,
    media_queries: MediaQueryTable,
}

impl SelectionConfig {
    /// Derives the media query table and checks that every breakpoint a
    /// selection names exists in it.
    pub fn new(
        settings: GlobalSettings,
        selections: IndexMap<String, Selection>,
    ) -> AtomicResult<Self> {
        let media_queries = match &settings.break_points {
            Some(break_points) => MediaQueryTable::from_break_points(break_points)?,
            None => MediaQueryTable::default(),
        };

        for selection in selections.values() {
            if let Some(name) = selection
                .break_points()
                .iter()
                .find(|name| !media_queries.contains(name))
            {
                return Err(AtomicError::UnknownBreakpoint(name.clone()));
            }
        }

        Ok(Self {
            settings,
            selections,
            media_queries,
        })
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn namespace(&self) -> Option<&str> {
        self.settings.namespace.as_deref()
    }

    /// The selection for `id`; absent ids select nothing.
    pub fn selection(&self, id: &str) -> Option<&Selection> {
        self.selections.get(id)
    }

    pub fn selections(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.selections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn media_queries(&self) -> &MediaQueryTable {
        &self.media_queries
    }
}
