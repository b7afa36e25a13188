use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::record::{CollectionRecord, StoreValue, VariableRecord, VariableType};
use crate::traits::VariableStore;

/// An in-process [`VariableStore`].
///
/// Ids are sequential (`VariableCollectionId:1`, `VariableID:2`, ...) so
/// runs are reproducible.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Vec<CollectionRecord>,
    variables: BTreeMap<String, VariableRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience lookup: the first variable named `name` in the first
    /// collection named `collection`.
    pub fn find_variable(&self, collection: &str, name: &str) -> Option<&VariableRecord> {
        let col = self.collections.iter().find(|c| c.name == collection)?;
        col.variable_ids
            .iter()
            .filter_map(|id| self.variables.get(id))
            .find(|v| v.name == name)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_name(name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

impl VariableStore for MemoryStore {
    fn list_collections(&self) -> Result<Vec<CollectionRecord>, StoreError> {
        Ok(self.collections.clone())
    }

    fn create_collection(&mut self, name: &str) -> Result<CollectionRecord, StoreError> {
        Self::check_name(name)?;
        let n = self.next_id();
        let record = CollectionRecord {
            id: format!("VariableCollectionId:{n}"),
            name: name.to_string(),
            default_mode_id: format!("{n}:0"),
            variable_ids: Vec::new(),
        };
        tracing::trace!(id = %record.id, name, "created collection");
        self.collections.push(record.clone());
        Ok(record)
    }

    fn get_variable(&self, variable_id: &str) -> Result<Option<VariableRecord>, StoreError> {
        Ok(self.variables.get(variable_id).cloned())
    }

    fn create_variable(
        &mut self,
        name: &str,
        collection_id: &str,
        resolved_type: VariableType,
    ) -> Result<VariableRecord, StoreError> {
        Self::check_name(name)?;
        let n = self.next_id();
        let collection = self
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| StoreError::CollectionNotFound {
                collection_id: collection_id.to_string(),
            })?;

        let record = VariableRecord {
            id: format!("VariableID:{n}"),
            name: name.to_string(),
            collection_id: collection_id.to_string(),
            resolved_type,
            values_by_mode: BTreeMap::new(),
        };
        collection.variable_ids.push(record.id.clone());
        self.variables.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn set_value_for_mode(
        &mut self,
        variable_id: &str,
        mode_id: &str,
        value: StoreValue,
    ) -> Result<(), StoreError> {
        let variable =
            self.variables
                .get_mut(variable_id)
                .ok_or_else(|| StoreError::VariableNotFound {
                    variable_id: variable_id.to_string(),
                })?;

        let owns_mode = self
            .collections
            .iter()
            .any(|c| c.id == variable.collection_id && c.default_mode_id == mode_id);
        if !owns_mode {
            return Err(StoreError::ModeNotFound {
                variable_id: variable_id.to_string(),
                mode_id: mode_id.to_string(),
            });
        }

        let actual = value.variable_type();
        if actual != variable.resolved_type {
            return Err(StoreError::TypeMismatch {
                variable_id: variable_id.to_string(),
                expected: variable.resolved_type,
                actual,
            });
        }

        variable.values_by_mode.insert(mode_id.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ColorValue;

    #[test]
    fn ids_are_sequential() {
        let mut store = MemoryStore::new();
        let a = store.create_collection("A").unwrap();
        let v = store.create_variable("x", &a.id, VariableType::Float).unwrap();
        assert_eq!(a.id, "VariableCollectionId:1");
        assert_eq!(a.default_mode_id, "1:0");
        assert_eq!(v.id, "VariableID:2");
    }

    #[test]
    fn find_variable_by_names() {
        let mut store = MemoryStore::new();
        let a = store.create_collection("Colors").unwrap();
        let v = store.create_variable("brand/primary", &a.id, VariableType::Color).unwrap();
        let color = StoreValue::Color(ColorValue { r: 0.0, g: 0.4, b: 1.0, a: 1.0 });
        store.set_value_for_mode(&v.id, &a.default_mode_id, color.clone()).unwrap();

        let found = store.find_variable("Colors", "brand/primary").unwrap();
        assert_eq!(found.values_by_mode[&a.default_mode_id], color);
        assert!(store.find_variable("Colors", "missing").is_none());
        assert!(store.find_variable("Other", "brand/primary").is_none());
    }

    #[test]
    fn mode_of_another_collection_is_rejected() {
        let mut store = MemoryStore::new();
        let a = store.create_collection("A").unwrap();
        let b = store.create_collection("B").unwrap();
        let v = store.create_variable("x", &a.id, VariableType::Boolean).unwrap();
        let err = store
            .set_value_for_mode(&v.id, &b.default_mode_id, StoreValue::Boolean(true))
            .unwrap_err();
        assert!(matches!(err, StoreError::ModeNotFound { .. }));
    }

    #[test]
    fn store_value_serializes_like_host_values() {
        let v = serde_json::to_value(StoreValue::Float(8.0)).unwrap();
        assert_eq!(v, serde_json::json!(8.0));
        let t = serde_json::to_value(VariableType::Color).unwrap();
        assert_eq!(t, serde_json::json!("COLOR"));
    }
}
