//! Commit message sources: files, the git edit message, or stdin.

use crate::error::InputError;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default message file git writes while a commit is being edited.
pub const EDIT_MSG: &str = ".git/COMMIT_EDITMSG";

/// Collect message file paths.
///
/// `files` are taken as given; `edit` resolves against `repo_root` and is
/// `Some(None)` for a bare `--edit`, which means `.git/COMMIT_EDITMSG`.
pub fn message_paths(repo_root: &Path, files: &[String], edit: Option<Option<&str>>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    if let Some(edit) = edit {
        paths.push(repo_root.join(edit.unwrap_or(EDIT_MSG)));
    }
    paths
}

/// Label shown for `path`: relative to `repo_root` when possible.
pub fn display_path(repo_root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, repo_root)
        .filter(|p| !p.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Read `(label, message)` pairs from `paths`.
pub fn read_files(repo_root: &Path, paths: &[PathBuf]) -> Result<Vec<(String, String)>, InputError> {
    paths
        .iter()
        .map(|p| {
            let text = fs::read_to_string(p).map_err(|source| InputError::Read {
                path: p.clone(),
                source,
            })?;
            Ok((display_path(repo_root, p), text))
        })
        .collect()
}

pub fn read_stdin() -> Result<(String, String), InputError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(("stdin".to_string(), text))
}
