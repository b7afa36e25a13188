//! The canonical `collection -> variable -> value` model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::TokenValue;

/// Variables of one collection, keyed by slash-joined name.
pub type VariableMap = IndexMap<String, TokenValue>;

/// Parsed tokens grouped by collection.
///
/// Collection names are unique and never empty; variable names are unique
/// within their collection. Iteration follows first-seen order in the source
/// document. A model is built once by a parser and not modified afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "IndexMap<String, VariableMap>", into = "IndexMap<String, VariableMap>")]
pub struct CanonicalModel {
    collections: IndexMap<String, VariableMap>,
}

impl CanonicalModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no collection exists. An empty model is a valid parse result.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Number of variables across all collections.
    pub fn token_count(&self) -> usize {
        self.collections.values().map(IndexMap::len).sum()
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn collection(&self, name: &str) -> Option<&VariableMap> {
        self.collections.get(name)
    }

    pub fn get(&self, collection: &str, variable: &str) -> Option<&TokenValue> {
        self.collections.get(collection)?.get(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableMap)> {
        self.collections.iter().map(|(name, vars)| (name.as_str(), vars))
    }

    /// Returns the named collection, creating it empty on first use.
    /// `None` for an empty name.
    pub(crate) fn collection_mut(&mut self, name: &str) -> Option<&mut VariableMap> {
        if name.is_empty() {
            tracing::debug!("dropping tokens filed under an empty collection name");
            return None;
        }
        Some(self.collections.entry(name.to_owned()).or_default())
    }

    /// Insert or overwrite one variable. Overwriting keeps the variable's
    /// original position.
    pub(crate) fn insert(
        &mut self,
        collection: &str,
        variable: impl Into<String>,
        value: TokenValue,
    ) {
        if let Some(vars) = self.collection_mut(collection) {
            vars.insert(variable.into(), value);
        }
    }
}

impl TryFrom<IndexMap<String, VariableMap>> for CanonicalModel {
    type Error = String;

    fn try_from(collections: IndexMap<String, VariableMap>) -> Result<Self, Self::Error> {
        if collections.contains_key("") {
            return Err("collection names must not be empty".to_string());
        }
        Ok(CanonicalModel { collections })
    }
}

impl From<CanonicalModel> for IndexMap<String, VariableMap> {
    fn from(model: CanonicalModel) -> Self {
        model.collections
    }
}
