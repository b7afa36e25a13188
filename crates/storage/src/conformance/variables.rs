use super::{brand_blue, fetch_variable, Category, CheckResult};
use crate::record::{StoreValue, VariableType};
use crate::VariableStore;

pub(super) fn run_variable_tests<S, F>(factory: &F) -> Vec<CheckResult>
where
    S: VariableStore,
    F: Fn() -> S,
{
    vec![
        CheckResult::new(
            Category::Variables,
            "create_variable_joins_collection",
            create_variable_joins_collection(factory),
        ),
        CheckResult::new(
            Category::Variables,
            "created_variable_readable_by_id",
            created_variable_readable_by_id(factory),
        ),
        CheckResult::new(
            Category::Variables,
            "set_value_visible_for_default_mode",
            set_value_visible_for_default_mode(factory),
        ),
        CheckResult::new(
            Category::Variables,
            "set_value_overwrites_previous",
            set_value_overwrites_previous(factory),
        ),
        CheckResult::new(
            Category::Variables,
            "slash_names_are_kept_verbatim",
            slash_names_are_kept_verbatim(factory),
        ),
        CheckResult::new(
            Category::Variables,
            "get_unknown_variable_is_none",
            get_unknown_variable_is_none(factory),
        ),
    ]
}

fn create_variable_joins_collection<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Colors").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("primary", &col.id, VariableType::Color)
        .map_err(|e| e.to_string())?;

    let listed = s.list_collections().map_err(|e| e.to_string())?;
    let col = listed
        .iter()
        .find(|c| c.id == col.id)
        .ok_or("collection disappeared")?;
    if col.variable_ids != [var.id.clone()] {
        return Err(format!(
            "expected variable_ids [{}], got {:?}",
            var.id, col.variable_ids
        ));
    }
    Ok(())
}

fn created_variable_readable_by_id<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Flags").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("dark-mode", &col.id, VariableType::Boolean)
        .map_err(|e| e.to_string())?;

    let fetched = fetch_variable(&s, &var.id)?;
    if fetched.name != "dark-mode"
        || fetched.collection_id != col.id
        || fetched.resolved_type != VariableType::Boolean
    {
        return Err(format!("unexpected record: {:?}", fetched));
    }
    if !fetched.values_by_mode.is_empty() {
        return Err("new variable already has values".to_string());
    }
    Ok(())
}

fn set_value_visible_for_default_mode<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Colors").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("primary", &col.id, VariableType::Color)
        .map_err(|e| e.to_string())?;
    s.set_value_for_mode(&var.id, &col.default_mode_id, brand_blue())
        .map_err(|e| e.to_string())?;

    let fetched = fetch_variable(&s, &var.id)?;
    match fetched.values_by_mode.get(&col.default_mode_id) {
        Some(v) if *v == brand_blue() => Ok(()),
        other => Err(format!("expected brand blue, got {:?}", other)),
    }
}

fn set_value_overwrites_previous<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Spacing").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("gap", &col.id, VariableType::Float)
        .map_err(|e| e.to_string())?;
    for n in [4.0, 8.0] {
        s.set_value_for_mode(&var.id, &col.default_mode_id, StoreValue::Float(n))
            .map_err(|e| e.to_string())?;
    }

    let fetched = fetch_variable(&s, &var.id)?;
    match fetched.values_by_mode.get(&col.default_mode_id) {
        Some(StoreValue::Float(n)) if *n == 8.0 => Ok(()),
        other => Err(format!("expected Float(8.0), got {:?}", other)),
    }
}

fn slash_names_are_kept_verbatim<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let col = s.create_collection("Theme").map_err(|e| e.to_string())?;
    let var = s
        .create_variable("brand/muted/fg", &col.id, VariableType::String)
        .map_err(|e| e.to_string())?;
    let fetched = fetch_variable(&s, &var.id)?;
    if fetched.name != "brand/muted/fg" {
        return Err(format!("name changed to {:?}", fetched.name));
    }
    Ok(())
}

fn get_unknown_variable_is_none<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let s = factory();
    match s.get_variable("no-such-variable") {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None), got {:?}", other)),
    }
}
