//! tokenport-import: applies a [`CanonicalModel`] to a [`VariableStore`].
//!
//! Sits between the parsing core and the host's variables API:
//!
//! - [`apply_model()`] -- find-or-create collections and variables, then
//!   write every token's value for the collection's default mode
//! - [`ImportSession`] -- the caller-owned file queue and current parse
//! - [`handle_message()`] -- dispatch for the UI/host message protocol
//!
//! [`CanonicalModel`]: tokenport_core::CanonicalModel
//! [`VariableStore`]: tokenport_storage::VariableStore

pub mod apply;
pub mod convert;
pub mod error;
pub mod messages;
pub mod options;
pub mod session;

pub use apply::{apply_model, FailedVariable, ImportReport};
pub use convert::{resolve_variable_type, to_store_value};
pub use error::ImportError;
pub use messages::{handle_message, HostReply, PluginMessage};
pub use options::ImportOptions;
pub use session::{AddFilesOutcome, CollectionPreview, ImportSession, SourceFile};
