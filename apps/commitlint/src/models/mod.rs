//! Shared data models for rule configuration and lint outputs.

pub mod rule;

pub use rule::{Applicability, RuleConfig, RuleOverrideSet, RuleValue, Severity};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single rule violation found in a commit message.
pub struct Problem {
    pub level: Severity,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of linting one commit message.
pub struct LintOutcome {
    /// Where the message came from (file path or `stdin`); empty for library calls.
    pub source: String,
    pub input: String,
    pub valid: bool,
    pub ignored: bool,
    pub errors: Vec<Problem>,
    pub warnings: Vec<Problem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers and the exit code.
pub struct Summary {
    pub inputs: usize,
    pub errors: usize,
    pub warnings: usize,
    pub ignored: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Lint results container for one CLI run.
pub struct LintReport {
    pub results: Vec<LintOutcome>,
    pub summary: Summary,
}

impl LintReport {
    pub fn new(results: Vec<LintOutcome>) -> Self {
        let summary = Summary {
            inputs: results.len(),
            errors: results.iter().map(|r| r.errors.len()).sum(),
            warnings: results.iter().map(|r| r.warnings.len()).sum(),
            ignored: results.iter().filter(|r| r.ignored).count(),
        };
        LintReport { results, summary }
    }
}
