//! Behavioral checks any [`VariableStore`] must pass before the importer can
//! run against it.
//!
//! Each check gets a fresh store from the caller's factory, so checks never
//! see each other's collections:
//!
//! ```ignore
//! use tokenport_storage::conformance::run_conformance_suite;
//!
//! #[test]
//! fn host_bridge_conformance() {
//!     let report = run_conformance_suite(|| HostBridgeStore::connect_test_document());
//!     assert!(report.is_clean(), "{report}");
//! }
//! ```

mod collections;
mod errors;
mod variables;

use std::fmt;

use crate::record::{ColorValue, StoreValue, VariableRecord};
use crate::VariableStore;

/// Which part of the store contract a check exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Collections,
    Variables,
    Errors,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Collections => "collections",
            Category::Variables => "variables",
            Category::Errors => "errors",
        })
    }
}

/// Outcome of one check. `Err` holds what the store did instead.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub category: Category,
    pub name: &'static str,
    pub outcome: Result<(), String>,
}

impl CheckResult {
    fn new(category: Category, name: &'static str, outcome: Result<(), String>) -> Self {
        CheckResult {
            category,
            name,
            outcome,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Every check from one [`run_conformance_suite`] call, in run order.
#[derive(Debug, Clone, Default)]
pub struct ConformanceReport {
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed();
        writeln!(f, "{} checks, {} failed", self.total(), failed)?;
        for check in self.failures() {
            if let Err(reason) = &check.outcome {
                writeln!(f, "  {}::{}: {}", check.category, check.name, reason)?;
            }
        }
        Ok(())
    }
}

/// Run every check against stores built by `factory`.
pub fn run_conformance_suite<S, F>(factory: F) -> ConformanceReport
where
    S: VariableStore,
    F: Fn() -> S,
{
    let mut results = collections::run_collection_tests(&factory);
    results.extend(variables::run_variable_tests(&factory));
    results.extend(errors::run_error_tests(&factory));
    ConformanceReport { results }
}

fn brand_blue() -> StoreValue {
    StoreValue::Color(ColorValue {
        r: 0.0,
        g: 0.4,
        b: 1.0,
        a: 1.0,
    })
}

/// Re-read a variable the check just created.
fn fetch_variable<S: VariableStore>(store: &S, id: &str) -> Result<VariableRecord, String> {
    store
        .get_variable(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("variable {id} not found after creation"))
}
