use crate::record::VariableType;

/// All errors that can be returned by a VariableStore implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// No collection with the given id.
    #[error("collection not found: {collection_id}")]
    CollectionNotFound { collection_id: String },

    /// No variable with the given id.
    #[error("variable not found: {variable_id}")]
    VariableNotFound { variable_id: String },

    /// The collection that owns the variable has no such mode.
    #[error("mode {mode_id} not found for variable {variable_id}")]
    ModeNotFound {
        variable_id: String,
        mode_id: String,
    },

    /// The value's type differs from the variable's resolved type. Variable
    /// types are fixed at creation.
    #[error("type mismatch on variable {variable_id}: expected {expected}, got {actual}")]
    TypeMismatch {
        variable_id: String,
        expected: VariableType,
        actual: VariableType,
    },

    /// Collection and variable names must be non-empty.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// A backend-specific failure (host API call, serialization, etc.).
    #[error("store backend error: {0}")]
    Backend(String),
}
