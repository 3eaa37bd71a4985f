//! The build tree handed to the CSS serializer.
//!
//! Selector keys map to a [`StyleBlock`] holding plain declarations and,
//! for responsive variants, declarations nested under media queries.

use crate::value::CssValue;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Property → value, in first-write order.
pub type Declarations = IndexMap<String, CssValue>;

/// Everything written under one selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBlock {
    declarations: Declarations,
    media: IndexMap<String, Declarations>,
}

impl StyleBlock {
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Declarations nested under `query`, e.g. `@media(min-width:200px)`.
    pub fn media(&self, query: &str) -> Option<&Declarations> {
        self.media.get(query)
    }

    pub fn media_blocks(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.media.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.media.is_empty()
    }

    fn declaration_count(&self) -> usize {
        self.declarations.len() + self.media.values().map(IndexMap::len).sum::<usize>()
    }

    fn merge(&mut self, other: StyleBlock) {
        self.declarations.extend(other.declarations);
        for (query, declarations) in other.media {
            self.media.entry(query).or_default().extend(declarations);
        }
    }
}

impl Serialize for StyleBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len() + self.media.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        for (query, declarations) in &self.media {
            map.serialize_entry(query, declarations)?;
        }
        map.end()
    }
}

/// Escaped selector → [`StyleBlock`].
///
/// Writing the same selector and property twice keeps the first position
/// and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct BuildTree(IndexMap<String, StyleBlock>);

impl BuildTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `selector { property: value }`.
    pub fn insert(&mut self, selector: &str, property: &str, value: CssValue) {
        self.0
            .entry(selector.to_string())
            .or_default()
            .declarations
            .insert(property.to_string(), value);
    }

    /// Writes `selector { query { property: value } }`.
    pub fn insert_media(&mut self, selector: &str, query: &str, property: &str, value: CssValue) {
        self.0
            .entry(selector.to_string())
            .or_default()
            .media
            .entry(query.to_string())
            .or_default()
            .insert(property.to_string(), value);
    }

    /// Folds `other` into this tree.
    pub fn merge(&mut self, other: BuildTree) {
        for (selector, block) in other.0 {
            self.0.entry(selector).or_default().merge(block);
        }
    }

    /// Returns a new tree that is this one with `other` folded in.
    #[must_use]
    pub fn merged(&self, other: &BuildTree) -> Self {
        let mut result = self.clone();
        result.merge(other.clone());
        result
    }

    pub fn get(&self, selector: &str) -> Option<&StyleBlock> {
        self.0.get(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.0.contains_key(selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of leaf declarations across all selectors and media blocks.
    pub fn declaration_count(&self) -> usize {
        self.0.values().map(StyleBlock::declaration_count).sum()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<BuildTree> for BuildTree {
    fn from_iter<I: IntoIterator<Item = BuildTree>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut acc, delta| {
            acc.merge(delta);
            acc
        })
    }
}
