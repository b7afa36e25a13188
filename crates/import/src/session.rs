//! The caller-owned state of one import: a queue of files, the parse of the
//! file at its head, and the chosen target collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tokenport_core::{
    parse_document, CanonicalModel, DocumentFormat, ParseError, RawDocument, TokenValue,
};
use tokenport_storage::VariableStore;

use crate::apply::{apply_model, ImportReport};
use crate::error::ImportError;
use crate::options::ImportOptions;

/// A file handed over by the host, already read into memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_file_name(&self.name)
    }
}

/// What [`ImportSession::add_files`] did with each offered file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFilesOutcome {
    pub added: Vec<String>,
    /// Already queued under the same name.
    pub duplicates: Vec<String>,
    /// Not `.json` or `.csv`.
    pub rejected: Vec<String>,
}

/// Summary of one parsed collection for display before import.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPreview {
    pub collection: String,
    pub token_count: usize,
    /// The first tokens of the collection, in document order.
    pub sample: Vec<(String, TokenValue)>,
    /// Tokens not included in `sample`.
    pub remaining: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    files: Vec<SourceFile>,
    parsed: Option<CanonicalModel>,
    last_error: Option<ParseError>,
    options: ImportOptions,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// The parse of the first queued file, if it succeeded.
    pub fn parsed(&self) -> Option<&CanonicalModel> {
        self.parsed.as_ref()
    }

    /// Why the first queued file failed to parse, if it did.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Queue importable files, skipping names already queued, then re-parse
    /// the head of the queue. Nothing changes when no offered file has a
    /// supported extension.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = SourceFile>) -> AddFilesOutcome {
        let mut outcome = AddFilesOutcome::default();
        let mut seen: HashSet<String> = self.files.iter().map(|f| f.name.clone()).collect();
        let mut accepted = Vec::new();

        for file in files {
            if file.format().is_none() {
                outcome.rejected.push(file.name);
            } else if !seen.insert(file.name.clone()) {
                outcome.duplicates.push(file.name);
            } else {
                outcome.added.push(file.name.clone());
                accepted.push(file);
            }
        }

        if !outcome.duplicates.is_empty() {
            tracing::debug!(count = outcome.duplicates.len(), "skipped duplicate files");
        }
        if accepted.is_empty() {
            return outcome;
        }

        self.files.extend(accepted);
        self.parse_first_file();
        outcome
    }

    /// Remove the queued file at `index`. Re-parses when files remain,
    /// otherwise clears the parse.
    pub fn remove_file(&mut self, index: usize) -> Option<SourceFile> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        if self.files.is_empty() {
            self.parsed = None;
            self.last_error = None;
        } else {
            self.parse_first_file();
        }
        Some(removed)
    }

    /// Parse the file at the head of the queue, replacing any previous
    /// parse. Returns the error when it fails; the error message names the
    /// file.
    pub fn parse_first_file(&mut self) -> Option<&ParseError> {
        self.parsed = None;
        self.last_error = None;

        let file = self.files.first()?;
        let Some(doc) = RawDocument::from_file(&file.name, file.text.as_str()) else {
            return None;
        };

        match parse_document(&doc) {
            Ok(model) => {
                tracing::debug!(
                    file = %file.name,
                    format = %doc.format(),
                    tokens = model.token_count(),
                    "parsed token file"
                );
                self.parsed = Some(model);
            }
            Err(err) => {
                tracing::warn!(file = %file.name, error = %err, "failed to parse token file");
                self.last_error = Some(err.with_context(&file.name));
            }
        }
        self.last_error.as_ref()
    }

    /// Choose the collection to import into; `None` means "use the parsed
    /// collection names".
    pub fn select_collection(&mut self, name: Option<String>) {
        self.options.preferred_collection = name;
    }

    /// Per-collection summaries of the current parse, each showing at most
    /// `limit` tokens.
    pub fn preview(&self, limit: usize) -> Vec<CollectionPreview> {
        let Some(model) = &self.parsed else {
            return Vec::new();
        };
        model
            .iter()
            .map(|(collection, variables)| {
                let sample: Vec<(String, TokenValue)> = variables
                    .iter()
                    .take(limit)
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                CollectionPreview {
                    collection: collection.to_string(),
                    token_count: variables.len(),
                    remaining: variables.len() - sample.len(),
                    sample,
                }
            })
            .collect()
    }

    /// Apply the current parse to `store` with the selected collection.
    pub fn import<S>(&self, store: &mut S) -> Result<ImportReport, ImportError>
    where
        S: VariableStore + ?Sized,
    {
        let model = self.parsed.as_ref().ok_or(ImportError::NothingToImport)?;
        apply_model(store, model, &self.options)
    }
}
