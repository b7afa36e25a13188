use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The type a variable is created with. Fixed for the variable's lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Boolean,
    Float,
    String,
    Color,
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariableType::Boolean => "BOOLEAN",
            VariableType::Float => "FLOAT",
            VariableType::String => "STRING",
            VariableType::Color => "COLOR",
        };
        f.write_str(name)
    }
}

/// A store-native color: four independent channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A value as the store holds it for one mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoreValue {
    Boolean(bool),
    Float(f64),
    Color(ColorValue),
    String(String),
}

impl StoreValue {
    pub fn variable_type(&self) -> VariableType {
        match self {
            StoreValue::Boolean(_) => VariableType::Boolean,
            StoreValue::Float(_) => VariableType::Float,
            StoreValue::Color(_) => VariableType::Color,
            StoreValue::String(_) => VariableType::String,
        }
    }
}

/// A variable collection as stored in the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionRecord {
    pub id: String,
    pub name: String,
    /// Mode written by imports.
    pub default_mode_id: String,
    /// Ids of the variables in this collection, in creation order.
    pub variable_ids: Vec<String>,
}

/// A single variable as stored in the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableRecord {
    pub id: String,
    pub name: String,
    pub collection_id: String,
    pub resolved_type: VariableType,
    /// Values keyed by mode id. Modes never written are absent.
    pub values_by_mode: BTreeMap<String, StoreValue>,
}
