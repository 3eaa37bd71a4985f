//! The finished build, as handed to the CSS serializer.

use atomic_model::{AtomicResult, BuildTree};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The result of one expansion pass.
///
/// Serializes as the bare tree, or as `{ namespace: tree }` when the config
/// set a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    tree: BuildTree,
    namespace: Option<String>,
}

impl Build {
    pub fn new(tree: BuildTree, namespace: Option<String>) -> Self {
        Self { tree, namespace }
    }

    /// The tree without namespace wrapping.
    pub fn tree(&self) -> &BuildTree {
        &self.tree
    }

    pub fn into_tree(self) -> BuildTree {
        self.tree
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The namespace-wrapped tree as JSON.
    pub fn get_build(&self) -> AtomicResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Empties the tree. The namespace is kept.
    pub fn flush(&mut self) {
        self.tree.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl Serialize for Build {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.namespace {
            Some(namespace) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(namespace, &self.tree)?;
                map.end()
            }
            None => self.tree.serialize(serializer),
        }
    }
}
