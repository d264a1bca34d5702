//! Named rule sets and `extends` resolution.
//!
//! `extends` entries are looked up explicitly in a `RuleSetRegistry`; an
//! identifier that is not registered is a load-time error. Resolution merges
//! inherited rules in `extends` order and lets each set's own `rules` replace
//! inherited entries wholesale (no per-field merge).

use crate::error::ConfigError;
use crate::models::{Applicability, RuleConfig, RuleOverrideSet, Severity};
use crate::provider::CONVENTIONAL;
use crate::rules::{self, ActiveRule, RuleKind};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// Messages git or release tooling writes on its own; skipped unless
/// `defaultIgnores = false`.
const DEFAULT_IGNORES: &[&str] = &[
    r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
    r"(?m)^(Merge tag (.*?))(?:\r?\n)*$",
    r"^(R|r)evert (.*)",
    r"^(amend|fixup|squash)!",
    r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
    r"^Merge remote-tracking branch(\s*)(.*)",
    r"^Automatic merge(.*)",
    r"^Auto-merged (.*?) into (.*)",
    r"^v?\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?\s*$",
];

#[derive(Debug, Default, Clone)]
/// Registry of named rule sets `extends` can refer to.
pub struct RuleSetRegistry {
    sets: HashMap<String, RuleOverrideSet>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the engine for one lint run.
pub struct ResolvedConfig {
    /// Enabled rules in rule-name order.
    pub rules: Vec<ActiveRule>,
    /// Effective rule table after merging, disabled rules included.
    pub table: BTreeMap<String, RuleConfig>,
    pub ignores: Vec<Regex>,
    pub help_url: Option<String>,
}

impl ResolvedConfig {
    pub fn rule(&self, kind: RuleKind) -> Option<&ActiveRule> {
        self.rules.iter().find(|r| r.kind == kind)
    }
}

/// The conventional-commit preset.
pub fn conventional() -> RuleOverrideSet {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};
    let rules = [
        ("body-leading-blank", RuleConfig::new(Warning, Always)),
        ("body-max-line-length", RuleConfig::limit(Error, Always, 100)),
        ("footer-leading-blank", RuleConfig::new(Warning, Always)),
        ("footer-max-line-length", RuleConfig::limit(Error, Always, 100)),
        ("header-max-length", RuleConfig::limit(Error, Always, 100)),
        ("header-trim", RuleConfig::new(Error, Always)),
        (
            "subject-case",
            RuleConfig::words(
                Error,
                Never,
                &["sentence-case", "start-case", "pascal-case", "upper-case"],
            ),
        ),
        ("subject-empty", RuleConfig::new(Error, Never)),
        ("subject-full-stop", RuleConfig::text(Error, Never, ".")),
        ("type-case", RuleConfig::text(Error, Always, "lower-case")),
        ("type-empty", RuleConfig::new(Error, Never)),
        (
            "type-enum",
            RuleConfig::words(
                Error,
                Always,
                &[
                    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                    "style", "test",
                ],
            ),
        ),
    ];
    RuleOverrideSet {
        rules: rules
            .into_iter()
            .map(|(name, rc)| (name.to_string(), rc))
            .collect(),
        ..RuleOverrideSet::default()
    }
}

#[derive(Default)]
struct Merged {
    rules: BTreeMap<String, RuleConfig>,
    default_ignores: Option<bool>,
    ignores: Vec<String>,
    help_url: Option<String>,
}

impl Merged {
    fn apply(&mut self, set: &RuleOverrideSet) {
        for (name, rc) in &set.rules {
            self.rules.insert(name.clone(), rc.clone());
        }
        if set.default_ignores.is_some() {
            self.default_ignores = set.default_ignores;
        }
        self.ignores.extend(set.ignores.iter().cloned());
        if set.help_url.is_some() {
            self.help_url = set.help_url.clone();
        }
    }
}

impl RuleSetRegistry {
    pub fn empty() -> Self {
        RuleSetRegistry::default()
    }

    /// Registry with the rule sets shipped in this crate.
    pub fn builtin() -> Self {
        let mut reg = RuleSetRegistry::empty();
        reg.register(CONVENTIONAL, conventional());
        reg
    }

    /// Add or replace a named rule set.
    pub fn register(&mut self, name: &str, set: RuleOverrideSet) {
        self.sets.insert(name.to_string(), set);
    }

    pub fn get(&self, name: &str) -> Option<&RuleOverrideSet> {
        self.sets.get(name)
    }

    /// Resolve `extends`, merge overrides and validate the result.
    ///
    /// Fails before any rule is compiled when an `extends` entry is unknown.
    pub fn resolve(&self, set: &RuleOverrideSet) -> Result<ResolvedConfig, ConfigError> {
        let mut merged = Merged::default();
        let mut stack: Vec<String> = Vec::new();
        self.collect(set, &mut merged, &mut stack)?;

        for name in merged.rules.keys() {
            if RuleKind::from_name(name).is_none() {
                return Err(ConfigError::UnknownRule { name: name.clone() });
            }
        }

        let mut active = Vec::new();
        for (name, rc) in &merged.rules {
            let Some(kind) = RuleKind::from_name(name) else {
                continue;
            };
            if rc.severity == Severity::Disabled {
                continue;
            }
            let arg = rules::compile(kind, rc.value.as_ref())?;
            active.push(ActiveRule {
                kind,
                severity: rc.severity,
                applicability: rc.applicability,
                arg,
            });
        }
        active.sort_by_key(|r| r.kind);

        let mut patterns: Vec<&str> = Vec::new();
        if merged.default_ignores.unwrap_or(true) {
            patterns.extend(DEFAULT_IGNORES.iter().copied());
        }
        patterns.extend(merged.ignores.iter().map(String::as_str));
        let ignores = patterns
            .into_iter()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidIgnore {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolvedConfig {
            rules: active,
            table: merged.rules,
            ignores,
            help_url: merged.help_url,
        })
    }

    fn collect(
        &self,
        set: &RuleOverrideSet,
        merged: &mut Merged,
        stack: &mut Vec<String>,
    ) -> Result<(), ConfigError> {
        for name in &set.extends {
            if stack.iter().any(|s| s == name) {
                return Err(ConfigError::ExtendsCycle { name: name.clone() });
            }
            let base = self
                .get(name)
                .ok_or_else(|| ConfigError::Resolution { name: name.clone() })?;
            stack.push(name.clone());
            self.collect(base, merged, stack)?;
            stack.pop();
        }
        merged.apply(set);
        Ok(())
    }
}
