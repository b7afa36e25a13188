//! Applying a canonical model to a variable store.

use serde::Serialize;
use tokenport_core::CanonicalModel;
use tokenport_storage::{CollectionRecord, VariableRecord, VariableStore};

use crate::convert::{resolve_variable_type, to_store_value};
use crate::error::ImportError;
use crate::options::ImportOptions;

/// A token whose value could not be written.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailedVariable {
    pub collection: String,
    pub variable: String,
    pub reason: String,
}

/// Outcome of one [`apply_model`] call.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Tokens whose value was written.
    pub imported: usize,
    /// Names of collections that did not exist before the import.
    pub created_collections: Vec<String>,
    /// Variables created by the import.
    pub created_variables: usize,
    /// Tokens that were skipped or whose write the store refused.
    pub failed: Vec<FailedVariable>,
}

/// Write every token of `model` into `store`.
///
/// Collections and variables are matched by name and created when missing;
/// a new variable takes the type inferred from its token. Values go to each
/// collection's default mode. A refused write is recorded in the report and
/// the import moves on; a refused create aborts the import.
pub fn apply_model<S>(
    store: &mut S,
    model: &CanonicalModel,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError>
where
    S: VariableStore + ?Sized,
{
    let existing = store.list_collections()?;
    let mut report = ImportReport::default();

    for (parsed_name, variables) in model.iter() {
        let target = options.target_collection(parsed_name, model.len());
        let collection = match existing.iter().find(|c| c.name == target) {
            Some(found) => found.clone(),
            None => {
                let created = store.create_collection(target)?;
                report.created_collections.push(created.name.clone());
                created
            }
        };
        let known = resolve_variables(&*store, &collection)?;

        for (name, value) in variables {
            if name.is_empty() {
                tracing::warn!(collection = target, "skipping token with an empty name");
                report.failed.push(FailedVariable {
                    collection: target.to_string(),
                    variable: String::new(),
                    reason: "token has an empty name".to_string(),
                });
                continue;
            }

            let variable_id = match known.iter().find(|v| &v.name == name) {
                Some(existing) => existing.id.clone(),
                None => {
                    let created =
                        store.create_variable(name, &collection.id, resolve_variable_type(value))?;
                    report.created_variables += 1;
                    created.id
                }
            };

            match store.set_value_for_mode(
                &variable_id,
                &collection.default_mode_id,
                to_store_value(value),
            ) {
                Ok(()) => report.imported += 1,
                Err(err) => {
                    tracing::warn!(
                        collection = target,
                        variable = %name,
                        error = %err,
                        "failed to set value"
                    );
                    report.failed.push(FailedVariable {
                        collection: target.to_string(),
                        variable: name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        imported = report.imported,
        created_collections = report.created_collections.len(),
        created_variables = report.created_variables,
        failed = report.failed.len(),
        "applied token model"
    );
    Ok(report)
}

/// The collection's current variables. Ids that no longer resolve are skipped.
fn resolve_variables<S>(
    store: &S,
    collection: &CollectionRecord,
) -> Result<Vec<VariableRecord>, ImportError>
where
    S: VariableStore + ?Sized,
{
    let mut variables = Vec::with_capacity(collection.variable_ids.len());
    for id in &collection.variable_ids {
        if let Some(variable) = store.get_variable(id)? {
            variables.push(variable);
        }
    }
    Ok(variables)
}
