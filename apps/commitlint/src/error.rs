//! Configuration load errors.
//!
//! Rule violations are not errors; they are `Problem`s inside a `LintOutcome`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An `extends` entry does not name a registered rule set.
    #[error("cannot resolve rule set '{name}' listed in extends")]
    Resolution { name: String },

    #[error("rule set '{name}' extends itself through its extends chain")]
    ExtendsCycle { name: String },

    /// A key in `rules` is not a rule the engine knows.
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("rule '{rule}' needs a positive integer limit")]
    InvalidLimit { rule: String },

    #[error("rule '{rule}' has an invalid value: expected {expected}")]
    InvalidValue { rule: String, expected: String },

    #[error("invalid ignore pattern '{pattern}'")]
    InvalidIgnore {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
/// Failures reading the commit messages to lint.
pub enum InputError {
    #[error("failed to read commit message from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read commit message from stdin")]
    Stdin(#[source] std::io::Error),
}
