//! tokenport-core: design-token parsing and normalization.
//!
//! Turns raw JSON (simple/nested or DTCG dialect) and three-column CSV
//! documents into a [`CanonicalModel`]: an ordered `collection -> variable
//! name -> typed value` mapping that a variable store applier consumes.
//!
//! # Public API
//!
//! - [`parse_document()`] -- parse a [`RawDocument`] of either format
//! - [`parse_json()`] / [`parse_csv()`] -- format-specific entry points
//! - [`coerce()`] -- string to [`TokenValue`] type inference
//! - [`is_color()`] / [`to_rgba()`] -- color recognition and conversion
//! - [`flatten()`] -- nested object to slash-joined names
//! - [`ParseError`] -- the single failure type of a parse call

/// Collection used for top-level primitives in simple JSON and for a
/// `$value` at the document root in DTCG JSON.
pub const DEFAULT_COLLECTION: &str = "Default";
/// Separator joining nested key paths into one variable name.
pub const PATH_SEPARATOR: &str = "/";

pub mod color;
pub mod csv;
pub mod dialect;
pub mod document;
pub mod error;
pub mod flatten;
pub mod json;
pub mod model;
pub mod value;

// ── Convenience re-exports: key types ────────────────────────────────

pub use color::Rgba;
pub use dialect::Dialect;
pub use document::{DocumentFormat, RawDocument};
pub use error::{ParseError, ParseErrorKind};
pub use model::{CanonicalModel, VariableMap};
pub use value::TokenValue;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use color::{is_color, to_rgba};
pub use csv::{parse_csv, parse_csv_with_diagnostics};
pub use dialect::{contains_dtcg_tokens, detect_dialect};
pub use document::parse_document;
pub use flatten::flatten;
pub use json::parse_json;
pub use value::coerce;
