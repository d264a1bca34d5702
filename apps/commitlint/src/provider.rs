//! Built-in commit message configuration.
//!
//! Extends the conventional-commit rule set and relaxes two length limits.
//! Used whenever no `.commitlintrc.*` file is found.

use crate::models::{Applicability, RuleConfig, RuleOverrideSet, Severity};
use std::collections::BTreeMap;

pub const CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Maximum header length in characters.
pub const HEADER_MAX_LENGTH: usize = 120;
/// Maximum length of any body line in characters.
pub const BODY_MAX_LINE_LENGTH: usize = 220;

/// Return the built-in rule override set.
///
/// Pure: no I/O, no environment lookups. Every call builds an equal value.
pub fn configuration() -> RuleOverrideSet {
    let mut rules = BTreeMap::new();
    rules.insert(
        "header-max-length".to_string(),
        RuleConfig::limit(Severity::Error, Applicability::Always, HEADER_MAX_LENGTH),
    );
    rules.insert(
        "body-max-line-length".to_string(),
        RuleConfig::limit(Severity::Error, Applicability::Always, BODY_MAX_LINE_LENGTH),
    );
    RuleOverrideSet {
        extends: vec![CONVENTIONAL.to_string()],
        rules,
        ..RuleOverrideSet::default()
    }
}
