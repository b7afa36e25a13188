use crate::error::StoreError;
use crate::record::{CollectionRecord, StoreValue, VariableRecord, VariableType};

/// The variable store an import is applied against.
///
/// This is the abstract shape of the host design tool's variables API:
/// named collections, each with a default mode, holding named variables of
/// a fixed type. Implementations wrap the host API or, for tests and
/// previews, hold everything in memory ([`crate::MemoryStore`]).
///
/// ## Names
///
/// Collection and variable names must be non-empty; implementations return
/// `StoreError::InvalidName` otherwise. Names are not required to be unique:
/// finding an existing collection or variable by name is the caller's job.
///
/// ## Types
///
/// `set_value_for_mode` must reject a value whose [`VariableType`] differs
/// from the variable's `resolved_type` with `StoreError::TypeMismatch`.
///
/// ## Exclusivity
///
/// Mutating methods take `&mut self`, so at most one import runs against a
/// given store handle at a time.
pub trait VariableStore {
    // ── Collections ──────────────────────────────────────────────────────────

    /// All collections, in creation order.
    fn list_collections(&self) -> Result<Vec<CollectionRecord>, StoreError>;

    /// Create an empty collection with a fresh default mode.
    fn create_collection(&mut self, name: &str) -> Result<CollectionRecord, StoreError>;

    // ── Variables ────────────────────────────────────────────────────────────

    /// Look up a variable by id. `Ok(None)` if it does not exist.
    fn get_variable(&self, variable_id: &str) -> Result<Option<VariableRecord>, StoreError>;

    /// Create a variable with no values in `collection_id`.
    ///
    /// Returns `Err(StoreError::CollectionNotFound)` for an unknown collection.
    fn create_variable(
        &mut self,
        name: &str,
        collection_id: &str,
        resolved_type: VariableType,
    ) -> Result<VariableRecord, StoreError>;

    /// Set a variable's value for one mode of its collection.
    fn set_value_for_mode(
        &mut self,
        variable_id: &str,
        mode_id: &str,
        value: StoreValue,
    ) -> Result<(), StoreError>;
}
