//! Configuration discovery and effective settings resolution.
//!
//! commitlint reads `.commitlintrc.toml|yaml|yml|json` from the repository
//! root (or the closest ancestor), or from `hooks/commitlint/` under it, and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - rule table: the built-in `provider::configuration()`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::RuleOverrideSet;
use crate::provider;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File names probed in each candidate directory, first match wins.
pub const CONFIG_FILES: [&str; 4] = [
    ".commitlintrc.toml",
    ".commitlintrc.yaml",
    ".commitlintrc.yml",
    ".commitlintrc.json",
];

/// Directory under the repository root also searched for a config file.
pub const HOOKS_DIR: &str = "hooks/commitlint";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `.commitlintrc.*`.
pub struct FileConfig {
    pub output: Option<String>,
    #[serde(flatten)]
    pub rules: RuleOverrideSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the effective rule table came from.
pub enum ConfigSource {
    BuiltIn,
    File(PathBuf),
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub source: ConfigSource,
    pub output: String,
    pub rules: RuleOverrideSet,
}

fn has_config(dir: &Path) -> bool {
    CONFIG_FILES.iter().any(|f| dir.join(f).is_file())
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file (directly or under `hooks/commitlint/`) or a
/// `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if has_config(cur) || has_config(&cur.join(HOOKS_DIR)) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Find the config file for `root`, preferring the root over the hooks dir.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    [root.to_path_buf(), root.join(HOOKS_DIR)]
        .into_iter()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |f| dir.join(f)))
        .find(|p| p.is_file())
}

/// Parse a config file; the format follows the file extension.
pub fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&s).map_err(|e| parse_err(e.to_string())),
        Some("json") => serde_json::from_str(&s).map_err(|e| parse_err(e.to_string())),
        _ => toml::from_str(&s).map_err(|e| parse_err(e.to_string())),
    }
}

/// Load the discovered config under `root`, if any.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, FileConfig)>, ConfigError> {
    match find_config(root) {
        Some(path) => {
            let cfg = read_config(&path)?;
            Ok(Some((path, cfg)))
        }
        None => Ok(None),
    }
}

/// Path of a `--config` argument given the current directory.
pub fn explicit_config_path(arg: &str, cwd: &Path) -> PathBuf {
    cwd.join(arg)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// An explicit `cli_config` path skips discovery; relative paths resolve
/// against the current directory.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);

    let loaded = match cli_config {
        Some(p) => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let path = explicit_config_path(p, &cwd);
            let cfg = read_config(&path)?;
            Some((path, cfg))
        }
        None => load_config(&repo_root)?,
    };

    let (source, file_output, rules) = match loaded {
        Some((path, cfg)) => (ConfigSource::File(path), cfg.output, cfg.rules),
        None => (ConfigSource::BuiltIn, None, provider::configuration()),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(file_output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        repo_root,
        source,
        output,
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Applicability, RuleConfig, Severity};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_when_no_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None).unwrap();
        assert_eq!(eff.source, ConfigSource::BuiltIn);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.rules, provider::configuration());
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = &fs::canonicalize(dir.path()).unwrap();
        let mut f = fs::File::create(root.join(".commitlintrc.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
extends = ["@commitlint/config-conventional"]
ignores = ["^WIP"]
[rules]
"header-max-length" = [1, "always", 72]
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(eff.source, ConfigSource::File(root.join(".commitlintrc.toml")));
        assert_eq!(eff.rules.ignores, vec!["^WIP".to_string()]);
        assert_eq!(
            eff.rules.rules["header-max-length"],
            RuleConfig::limit(Severity::Warning, Applicability::Always, 72)
        );
    }

    #[test]
    fn test_load_yaml_from_hooks_dir_from_nested_start() {
        let dir = tempdir().unwrap();
        let root = &fs::canonicalize(dir.path()).unwrap();
        let hooks = root.join(HOOKS_DIR);
        fs::create_dir_all(&hooks).unwrap();
        fs::write(
            hooks.join(".commitlintrc.yaml"),
            r#"
extends:
  - "@commitlint/config-conventional"
defaultIgnores: false
rules:
  body-max-line-length: [2, always, 220]
"#,
        )
        .unwrap();
        let nested = root.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(nested.to_str(), None, None).unwrap();
        assert_eq!(&eff.repo_root, root);
        assert_eq!(eff.rules.default_ignores, Some(false));
        assert_eq!(
            eff.rules.rules["body-max-line-length"],
            RuleConfig::limit(Severity::Error, Applicability::Always, 220)
        );
    }

    #[test]
    fn test_cli_precedence_and_explicit_json_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(
            root.join("lint.json"),
            r#"{"output": "json", "extends": [], "rules": {"type-empty": [2, "never"]}}"#,
        )
        .unwrap();
        let explicit = root.join("lint.json");
        let eff = resolve_effective(root.to_str(), explicit.to_str(), Some("human")).unwrap();
        assert_eq!(eff.output, "human");
        assert!(eff.rules.extends.is_empty());
        assert!(eff.rules.rules.contains_key("type-empty"));
    }

    #[test]
    fn test_explicit_config_path_is_relative_to_cwd() {
        let cwd = Path::new("/work/repo/sub");
        assert_eq!(
            explicit_config_path("./x.toml", cwd),
            PathBuf::from("/work/repo/sub/./x.toml")
        );
        assert_eq!(
            explicit_config_path("/etc/lint.toml", cwd),
            PathBuf::from("/etc/lint.toml")
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".commitlintrc.toml"), "rules = 3").unwrap();
        let err = resolve_effective(root.to_str(), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_read_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve_effective(dir.path().to_str(), missing.to_str(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
