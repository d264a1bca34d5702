//! Rule catalogue: names the engine recognizes, argument typing, evaluation.
//!
//! Configuration carries loosely-typed `RuleValue`s. `compile` checks a value
//! against what the rule expects and produces a typed `RuleArg`; `evaluate`
//! runs one `ActiveRule` against a parsed commit.

pub mod case;
mod checks;

pub use case::Case;

use crate::error::ConfigError;
use crate::message::Commit;
use crate::models::{Applicability, Problem, RuleValue, Severity};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Every rule the engine knows. Declared in name order so sorting by kind
/// sorts by rule name.
pub enum RuleKind {
    BodyEmpty,
    BodyFullStop,
    BodyLeadingBlank,
    BodyMaxLength,
    BodyMaxLineLength,
    BodyMinLength,
    FooterEmpty,
    FooterLeadingBlank,
    FooterMaxLength,
    FooterMaxLineLength,
    FooterMinLength,
    HeaderFullStop,
    HeaderMaxLength,
    HeaderMinLength,
    HeaderTrim,
    ScopeCase,
    ScopeEmpty,
    ScopeEnum,
    ScopeMaxLength,
    SubjectCase,
    SubjectEmpty,
    SubjectFullStop,
    SubjectMaxLength,
    TypeCase,
    TypeEmpty,
    TypeEnum,
    TypeMaxLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shape of the argument a rule takes.
pub enum ArgKind {
    None,
    Limit,
    Cases,
    Words,
    /// Optional text with a default.
    Text(&'static str),
}

impl RuleKind {
    pub const ALL: [RuleKind; 27] = [
        RuleKind::BodyEmpty,
        RuleKind::BodyFullStop,
        RuleKind::BodyLeadingBlank,
        RuleKind::BodyMaxLength,
        RuleKind::BodyMaxLineLength,
        RuleKind::BodyMinLength,
        RuleKind::FooterEmpty,
        RuleKind::FooterLeadingBlank,
        RuleKind::FooterMaxLength,
        RuleKind::FooterMaxLineLength,
        RuleKind::FooterMinLength,
        RuleKind::HeaderFullStop,
        RuleKind::HeaderMaxLength,
        RuleKind::HeaderMinLength,
        RuleKind::HeaderTrim,
        RuleKind::ScopeCase,
        RuleKind::ScopeEmpty,
        RuleKind::ScopeEnum,
        RuleKind::ScopeMaxLength,
        RuleKind::SubjectCase,
        RuleKind::SubjectEmpty,
        RuleKind::SubjectFullStop,
        RuleKind::SubjectMaxLength,
        RuleKind::TypeCase,
        RuleKind::TypeEmpty,
        RuleKind::TypeEnum,
        RuleKind::TypeMaxLength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::BodyEmpty => "body-empty",
            RuleKind::BodyFullStop => "body-full-stop",
            RuleKind::BodyLeadingBlank => "body-leading-blank",
            RuleKind::BodyMaxLength => "body-max-length",
            RuleKind::BodyMaxLineLength => "body-max-line-length",
            RuleKind::BodyMinLength => "body-min-length",
            RuleKind::FooterEmpty => "footer-empty",
            RuleKind::FooterLeadingBlank => "footer-leading-blank",
            RuleKind::FooterMaxLength => "footer-max-length",
            RuleKind::FooterMaxLineLength => "footer-max-line-length",
            RuleKind::FooterMinLength => "footer-min-length",
            RuleKind::HeaderFullStop => "header-full-stop",
            RuleKind::HeaderMaxLength => "header-max-length",
            RuleKind::HeaderMinLength => "header-min-length",
            RuleKind::HeaderTrim => "header-trim",
            RuleKind::ScopeCase => "scope-case",
            RuleKind::ScopeEmpty => "scope-empty",
            RuleKind::ScopeEnum => "scope-enum",
            RuleKind::ScopeMaxLength => "scope-max-length",
            RuleKind::SubjectCase => "subject-case",
            RuleKind::SubjectEmpty => "subject-empty",
            RuleKind::SubjectFullStop => "subject-full-stop",
            RuleKind::SubjectMaxLength => "subject-max-length",
            RuleKind::TypeCase => "type-case",
            RuleKind::TypeEmpty => "type-empty",
            RuleKind::TypeEnum => "type-enum",
            RuleKind::TypeMaxLength => "type-max-length",
        }
    }

    pub fn from_name(name: &str) -> Option<RuleKind> {
        RuleKind::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn arg_kind(self) -> ArgKind {
        use RuleKind::*;
        match self {
            BodyEmpty | BodyLeadingBlank | FooterEmpty | FooterLeadingBlank | HeaderTrim
            | ScopeEmpty | SubjectEmpty | TypeEmpty => ArgKind::None,
            BodyMaxLength | BodyMaxLineLength | BodyMinLength | FooterMaxLength
            | FooterMaxLineLength | FooterMinLength | HeaderMaxLength | HeaderMinLength
            | ScopeMaxLength | SubjectMaxLength | TypeMaxLength => ArgKind::Limit,
            ScopeCase | SubjectCase | TypeCase => ArgKind::Cases,
            ScopeEnum | TypeEnum => ArgKind::Words,
            BodyFullStop | HeaderFullStop | SubjectFullStop => ArgKind::Text("."),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed rule argument after validation.
pub enum RuleArg {
    None,
    Limit(usize),
    Cases(Vec<Case>),
    Words(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated, enabled rule ready for evaluation.
pub struct ActiveRule {
    pub kind: RuleKind,
    pub severity: Severity,
    pub applicability: Applicability,
    pub arg: RuleArg,
}

/// Check `value` against the argument shape `kind` expects.
pub fn compile(kind: RuleKind, value: Option<&RuleValue>) -> Result<RuleArg, ConfigError> {
    let invalid = |expected: &str| ConfigError::InvalidValue {
        rule: kind.name().to_string(),
        expected: expected.to_string(),
    };
    match (kind.arg_kind(), value) {
        (ArgKind::None, _) => Ok(RuleArg::None),
        (ArgKind::Limit, Some(RuleValue::Limit(n))) if *n > 0 => Ok(RuleArg::Limit(*n)),
        (ArgKind::Limit, _) => Err(ConfigError::InvalidLimit {
            rule: kind.name().to_string(),
        }),
        (ArgKind::Cases, Some(RuleValue::Text(name))) => Case::from_name(name)
            .map(|c| RuleArg::Cases(vec![c]))
            .ok_or_else(|| invalid("a case name")),
        (ArgKind::Cases, Some(RuleValue::Words(names))) if !names.is_empty() => names
            .iter()
            .map(|n| Case::from_name(n))
            .collect::<Option<Vec<_>>>()
            .map(RuleArg::Cases)
            .ok_or_else(|| invalid("a list of case names")),
        (ArgKind::Cases, _) => Err(invalid("a case name or a list of case names")),
        (ArgKind::Words, Some(RuleValue::Words(ws))) => Ok(RuleArg::Words(ws.clone())),
        (ArgKind::Words, _) => Err(invalid("a list of allowed values")),
        (ArgKind::Text(_), Some(RuleValue::Text(s))) => Ok(RuleArg::Text(s.clone())),
        (ArgKind::Text(default), None) => Ok(RuleArg::Text(default.to_string())),
        (ArgKind::Text(_), _) => Err(invalid("a text value")),
    }
}

/// Evaluate one rule. Returns a `Problem` when the commit violates it.
pub fn evaluate(rule: &ActiveRule, commit: &Commit) -> Option<Problem> {
    let verdict = checks::check(rule.kind, &rule.arg, rule.applicability, commit)?;
    let valid = match rule.applicability {
        Applicability::Always => verdict.holds,
        Applicability::Never => !verdict.holds,
    };
    if valid {
        return None;
    }
    Some(Problem {
        level: rule.severity,
        name: rule.kind.name().to_string(),
        message: verdict.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_are_unique_and_sorted() {
        let names: Vec<&str> = RuleKind::ALL.iter().map(|k| k.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        for k in RuleKind::ALL {
            assert_eq!(RuleKind::from_name(k.name()), Some(k));
        }
        assert_eq!(RuleKind::from_name("header-max-lenght"), None);
    }

    #[test]
    fn test_compile_limits() {
        assert_eq!(
            compile(RuleKind::HeaderMaxLength, Some(&RuleValue::Limit(120))).unwrap(),
            RuleArg::Limit(120)
        );
        assert!(matches!(
            compile(RuleKind::HeaderMaxLength, Some(&RuleValue::Limit(0))),
            Err(ConfigError::InvalidLimit { .. })
        ));
        assert!(matches!(
            compile(RuleKind::BodyMaxLineLength, None),
            Err(ConfigError::InvalidLimit { .. })
        ));
    }

    #[test]
    fn test_compile_cases_words_and_text() {
        assert_eq!(
            compile(RuleKind::TypeCase, Some(&RuleValue::Text("lower-case".into()))).unwrap(),
            RuleArg::Cases(vec![Case::Lower])
        );
        assert!(matches!(
            compile(
                RuleKind::SubjectCase,
                Some(&RuleValue::Words(vec!["shouting".into()]))
            ),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(compile(RuleKind::TypeEnum, Some(&RuleValue::Limit(3))).is_err());
        assert_eq!(
            compile(RuleKind::SubjectFullStop, None).unwrap(),
            RuleArg::Text(".".into())
        );
        assert_eq!(compile(RuleKind::HeaderTrim, None).unwrap(), RuleArg::None);
    }
}
