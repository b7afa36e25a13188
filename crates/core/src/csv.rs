//! Three-column CSV token documents.
//!
//! ```text
//! collection,variable,value
//! Colors,primary-blue,#0066FF
//! Spacing,small,8px
//! ```
//!
//! The first line is a header and is never read. Fields are split on every
//! comma; quoted fields are not supported, so a value cannot contain a comma.
//! Rows with an empty field are skipped, never fatal.

use crate::error::ParseError;
use crate::model::CanonicalModel;
use crate::value::coerce;

const FIELD_NAMES: [&str; 3] = ["collection", "variable", "value"];

/// Parse a CSV token document. Malformed rows are skipped.
pub fn parse_csv(text: &str) -> CanonicalModel {
    parse_csv_with_diagnostics(text).0
}

/// Parse a CSV token document, also returning one
/// [`ParseErrorKind::MissingField`](crate::ParseErrorKind::MissingField)
/// diagnostic per skipped row. Line numbers are 1-based positions in `text`.
pub fn parse_csv_with_diagnostics(text: &str) -> (CanonicalModel, Vec<ParseError>) {
    let mut model = CanonicalModel::new();
    let mut skipped = Vec::new();

    let body = text.trim_start();
    let first_line = 1 + text[..text.len() - body.len()].matches('\n').count();

    for (offset, line) in body.trim_end().split('\n').enumerate().skip(1) {
        let line_no = first_line + offset;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let row = [
            fields.next().unwrap_or(""),
            fields.next().unwrap_or(""),
            fields.next().unwrap_or(""),
        ];

        let missing: Vec<&str> = FIELD_NAMES
            .iter()
            .zip(row.iter())
            .filter(|(_, field)| field.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            tracing::debug!(line = line_no, ?missing, "skipping CSV row");
            skipped.push(ParseError::missing_field(
                line_no,
                format!("missing {}", missing.join(", ")),
            ));
            continue;
        }

        let [collection, variable, value] = row;
        model.insert(collection, variable, coerce(value));
    }

    tracing::debug!(
        collections = model.len(),
        tokens = model.token_count(),
        skipped = skipped.len(),
        "parsed CSV token document"
    );
    (model, skipped)
}
