use super::{Category, CheckResult};
use crate::VariableStore;

pub(super) fn run_collection_tests<S, F>(factory: &F) -> Vec<CheckResult>
where
    S: VariableStore,
    F: Fn() -> S,
{
    vec![
        CheckResult::new(
            Category::Collections,
            "new_store_has_no_collections",
            new_store_has_no_collections(factory),
        ),
        CheckResult::new(
            Category::Collections,
            "create_collection_is_listed",
            create_collection_is_listed(factory),
        ),
        CheckResult::new(
            Category::Collections,
            "create_collection_has_default_mode",
            create_collection_has_default_mode(factory),
        ),
        CheckResult::new(
            Category::Collections,
            "collections_listed_in_creation_order",
            collections_listed_in_creation_order(factory),
        ),
        CheckResult::new(
            Category::Collections,
            "collection_ids_are_distinct",
            collection_ids_are_distinct(factory),
        ),
    ]
}

fn new_store_has_no_collections<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let s = factory();
    let listed = s.list_collections().map_err(|e| e.to_string())?;
    if !listed.is_empty() {
        return Err(format!("expected no collections, got {}", listed.len()));
    }
    Ok(())
}

fn create_collection_is_listed<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let created = s.create_collection("Colors").map_err(|e| e.to_string())?;
    let listed = s.list_collections().map_err(|e| e.to_string())?;
    match listed.as_slice() {
        [only] if only.id == created.id && only.name == "Colors" => Ok(()),
        other => Err(format!("expected exactly [Colors], got {:?}", other)),
    }
}

/// A fresh collection must expose a default mode and hold no variables.
fn create_collection_has_default_mode<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let created = s.create_collection("Spacing").map_err(|e| e.to_string())?;
    if created.default_mode_id.is_empty() {
        return Err("default_mode_id is empty".to_string());
    }
    if !created.variable_ids.is_empty() {
        return Err(format!(
            "expected no variables, got {:?}",
            created.variable_ids
        ));
    }
    Ok(())
}

fn collections_listed_in_creation_order<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    for name in ["Colors", "Spacing", "Typography"] {
        s.create_collection(name).map_err(|e| e.to_string())?;
    }
    let names: Vec<String> = s
        .list_collections()
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|c| c.name)
        .collect();
    if names != ["Colors", "Spacing", "Typography"] {
        return Err(format!("unexpected order: {:?}", names));
    }
    Ok(())
}

/// Two collections with the same name are still two collections.
fn collection_ids_are_distinct<S, F>(factory: &F) -> Result<(), String>
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut s = factory();
    let a = s.create_collection("Theme").map_err(|e| e.to_string())?;
    let b = s.create_collection("Theme").map_err(|e| e.to_string())?;
    if a.id == b.id {
        return Err(format!("duplicate collection id {}", a.id));
    }
    Ok(())
}
