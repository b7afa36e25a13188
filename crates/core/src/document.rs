//! Raw input documents and format dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::csv::parse_csv;
use crate::error::ParseError;
use crate::json::parse_json;
use crate::model::CanonicalModel;

/// Input format, chosen by the caller from the file extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Csv,
}

impl DocumentFormat {
    /// `.json` or `.csv` (any case). Other extensions are not importable.
    pub fn from_file_name(name: &str) -> Option<DocumentFormat> {
        let (_, ext) = name.rsplit_once('.')?;
        if ext.eq_ignore_ascii_case("json") {
            Some(DocumentFormat::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(DocumentFormat::Csv)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Document text tagged with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    format: DocumentFormat,
    text: String,
}

impl RawDocument {
    pub fn new(format: DocumentFormat, text: impl Into<String>) -> Self {
        RawDocument {
            format,
            text: text.into(),
        }
    }

    /// Tag `text` by the extension of `file_name`; `None` if unsupported.
    pub fn from_file(file_name: &str, text: impl Into<String>) -> Option<Self> {
        DocumentFormat::from_file_name(file_name).map(|format| RawDocument::new(format, text))
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

/// Parse a document with the parser for its format. CSV never fails.
pub fn parse_document(doc: &RawDocument) -> Result<CanonicalModel, ParseError> {
    match doc.format {
        DocumentFormat::Json => parse_json(&doc.text),
        DocumentFormat::Csv => Ok(parse_csv(&doc.text)),
    }
}
