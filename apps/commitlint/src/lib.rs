//! commitlint core library.
//!
//! Lints commit messages against a rule table that extends the
//! conventional-commit preset with two relaxed length limits.
//!
//! High-level modules:
//! - `provider`: The built-in rule override set.
//! - `registry`: Named rule sets and `extends` resolution.
//! - `rules`: Rule catalogue, argument typing and evaluation.
//! - `message`: Commit message parsing.
//! - `lint`: Lint runner producing per-message outcomes.
//! - `config`: Discovery of `.commitlintrc.*` and effective settings.
//! - `input`: Reading messages from files, the git edit message or stdin.
//! - `output`: Human/JSON printers.
//! - `models`: Rule configuration and lint output structs.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lint;
pub mod message;
pub mod models;
pub mod output;
pub mod provider;
pub mod registry;
pub mod rules;
pub mod utils;
