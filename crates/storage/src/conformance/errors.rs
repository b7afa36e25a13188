use super::{fetch_variable, Category, CheckResult};
use crate::record::{StoreValue, VariableType};
use crate::{StoreError, VariableStore};

pub(super) fn run_error_tests<S, F>(factory: &F) -> Vec<CheckResult>
where
    S: VariableStore,
    F: Fn() -> S,
{
    vec![
        CheckResult::new(
            Category::Errors,
            "empty_collection_name_is_invalid",
            empty_collection_name_is_invalid(factory),
        ),
        CheckResult::new(
            Category::Errors,
            "empty_variable_name_is_invalid",
            empty_variable_name_is_invalid(factory),
        ),
        CheckResult::new(
            Category::Errors,
            "create_variable_in_unknown_collection",
            create_variable_in_unknown_collection(factory),
        ),
        CheckResult::new(
            Category::Errors,
            "set_value_on_unknown_variable",
            set_value_on_unknown_variable(factory),
        ),
        CheckResult::new(
            Category::Errors,
            "type_mismatch_rejected_and_value_unchanged",
            type_mismatch_rejected_and_value_unchanged(factory),
        ),
    ]
}

fn empty_collection_name_is_invalid<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    match s.create_collection("") {
        Err(StoreError::InvalidName(_)) => Ok(()),
        other => Err(format!("expected InvalidName, got {:?}", other)),
    }
}

fn empty_variable_name_is_invalid<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Colors").map_err(|e| e.to_string())?;
    match s.create_variable("", &col.id, VariableType::String) {
        Err(StoreError::InvalidName(_)) => Ok(()),
        other => Err(format!("expected InvalidName, got {:?}", other)),
    }
}

fn create_variable_in_unknown_collection<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    match s.create_variable("x", "no-such-collection", VariableType::Float) {
        Err(StoreError::CollectionNotFound { collection_id })
            if collection_id == "no-such-collection" =>
        {
            Ok(())
        }
        other => Err(format!("expected CollectionNotFound, got {:?}", other)),
    }
}

fn set_value_on_unknown_variable<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Colors").map_err(|e| e.to_string())?;
    match s.set_value_for_mode(
        "no-such-variable",
        &col.default_mode_id,
        StoreValue::Boolean(true),
    ) {
        Err(StoreError::VariableNotFound { variable_id }) if variable_id == "no-such-variable" => {
            Ok(())
        }
        other => Err(format!("expected VariableNotFound, got {:?}", other)),
    }
}

/// A FLOAT variable must refuse a STRING value and keep its old value.
fn type_mismatch_rejected_and_value_unchanged<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Spacing").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("gap", &col.id, VariableType::Float)
        .map_err(|e| e.to_string())?;
    s.set_value_for_mode(&var.id, &col.default_mode_id, StoreValue::Float(4.0))
        .map_err(|e| e.to_string())?;

    match s.set_value_for_mode(
        &var.id,
        &col.default_mode_id,
        StoreValue::String("8px".to_string()),
    ) {
        Err(StoreError::TypeMismatch {
            expected: VariableType::Float,
            actual: VariableType::String,
            ..
        }) => {}
        other => return Err(format!("expected TypeMismatch, got {:?}", other)),
    }

    let fetched = fetch_variable(&s, &var.id)?;
    match fetched.values_by_mode.get(&col.default_mode_id) {
        Some(StoreValue::Float(n)) if *n == 4.0 => Ok(()),
        other => Err(format!("value changed after rejected write: {:?}", other)),
    }
}
