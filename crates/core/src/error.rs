use serde::{Deserialize, Serialize};
use std::fmt;

/// What went wrong while parsing a token document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// The JSON text is not well-formed. Fatal to the parse.
    InvalidSyntax,
    /// A CSV row lacks a collection, variable or value field. Never fatal;
    /// only reported through [`crate::parse_csv_with_diagnostics`].
    MissingField,
}

/// A parse error. `line` is 1-based and present for CSV rows and for JSON
/// syntax errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: Option<usize>, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn syntax(line: Option<usize>, message: impl Into<String>) -> Self {
        ParseError::new(ParseErrorKind::InvalidSyntax, line, message)
    }

    pub fn missing_field(line: usize, message: impl Into<String>) -> Self {
        ParseError::new(ParseErrorKind::MissingField, Some(line), message)
    }

    /// Returns a copy whose message is prefixed with `context`, e.g. the
    /// name of the file being parsed.
    pub fn with_context(&self, context: &str) -> Self {
        ParseError {
            kind: self.kind,
            message: format!("{}: {}", context, self.message),
            line: self.line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            // serde_json messages already carry their position
            Some(_) if self.kind == ParseErrorKind::InvalidSyntax => f.write_str(&self.message),
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let line = (err.line() > 0).then_some(err.line());
        ParseError::syntax(line, err.to_string())
    }
}
