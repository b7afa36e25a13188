use serde::{Deserialize, Serialize};

/// Caller-supplied settings for one import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportOptions {
    /// Target collection name. Replaces the parsed name only when the model
    /// holds exactly one collection; ignored when empty.
    pub preferred_collection: Option<String>,
}

impl ImportOptions {
    pub fn with_preferred_collection(name: impl Into<String>) -> Self {
        ImportOptions {
            preferred_collection: Some(name.into()),
        }
    }

    /// The name to import `parsed_name` under, given how many collections
    /// the model holds.
    pub fn target_collection<'a>(
        &'a self,
        parsed_name: &'a str,
        collection_count: usize,
    ) -> &'a str {
        match self.preferred_collection.as_deref() {
            Some(preferred) if !preferred.is_empty() && collection_count == 1 => preferred,
            _ => parsed_name,
        }
    }
}
