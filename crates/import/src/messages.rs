//! The message protocol between the importer UI and the host side.
//!
//! Messages are JSON objects tagged by `type`:
//!
//! ```json
//! {"type": "import-tokens", "tokens": {"Colors": {"red": "#FF0000"}}, "collectionName": null}
//! {"type": "get-collections"}
//! {"type": "close"}
//! ```

use serde::{Deserialize, Serialize};
use tokenport_core::CanonicalModel;
use tokenport_storage::VariableStore;

use crate::apply::apply_model;
use crate::options::ImportOptions;

pub const IMPORT_SUCCESS_MESSAGE: &str = "Tokens imported successfully!";

/// A request from the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    /// Apply parsed tokens, optionally into a chosen collection.
    ImportTokens {
        tokens: CanonicalModel,
        #[serde(rename = "collectionName", default)]
        collection_name: Option<String>,
    },

    /// List the names of existing collections.
    GetCollections,

    Close,
}

/// The host's answer to a [`PluginMessage`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostReply {
    ImportSuccess {
        message: String,
        #[serde(rename = "tokenCount")]
        token_count: usize,
    },

    ImportError { message: String },

    CollectionsList { collections: Vec<String> },

    /// The UI should shut down.
    Closed,
}

/// Dispatch one UI message against `store`.
///
/// Never fails: import errors become [`HostReply::ImportError`], and a store
/// that cannot list its collections answers with an empty list.
pub fn handle_message<S>(store: &mut S, msg: PluginMessage) -> HostReply
where
    S: VariableStore + ?Sized,
{
    match msg {
        PluginMessage::ImportTokens {
            tokens,
            collection_name,
        } => {
            let options = ImportOptions {
                preferred_collection: collection_name,
            };
            match apply_model(store, &tokens, &options) {
                Ok(report) => HostReply::ImportSuccess {
                    message: IMPORT_SUCCESS_MESSAGE.to_string(),
                    token_count: report.imported,
                },
                Err(err) => {
                    tracing::warn!(error = %err, "token import failed");
                    HostReply::ImportError {
                        message: err.to_string(),
                    }
                }
            }
        }
        PluginMessage::GetCollections => {
            let collections = match store.list_collections() {
                Ok(collections) => collections.into_iter().map(|c| c.name).collect(),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to list collections");
                    Vec::new()
                }
            };
            HostReply::CollectionsList { collections }
        }
        PluginMessage::Close => HostReply::Closed,
    }
}
