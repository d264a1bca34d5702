//! Rule configuration schema shared by the provider, the registry and the engine.
//!
//! A rule is configured with the triple `[severity, applicability, value]`:
//! - `severity`: `0|1|2` or `"off"|"warn"|"error"`.
//! - `applicability`: `"always"|"never"` (optional, defaults to `always`).
//! - `value`: optional argument; a positive length limit, a list of words
//!   (enum members, case names) or a single text value.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// How a rule violation is treated.
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level used on the wire (0, 1, 2).
    pub fn level(self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "0" | "off" | "disabled" => Some(Severity::Disabled),
            "1" | "warn" | "warning" => Some(Severity::Warning),
            "2" | "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a severity level: 0, 1, 2, \"off\", \"warn\" or \"error\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
        Severity::from_level(v).ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
        i64::try_from(v)
            .ok()
            .and_then(Severity::from_level)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
        Severity::from_name(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether the rule's condition must hold (`always`) or must not (`never`).
pub enum Applicability {
    #[default]
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Loosely-typed rule argument as written in configuration.
pub enum RuleValue {
    Limit(usize),
    Words(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One configured rule: severity, applicability and optional argument.
pub struct RuleConfig {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        RuleConfig {
            severity,
            applicability,
            value: None,
        }
    }

    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Shorthand for length rules: `[severity, applicability, limit]`.
    pub fn limit(severity: Severity, applicability: Applicability, limit: usize) -> Self {
        RuleConfig::new(severity, applicability).with_value(RuleValue::Limit(limit))
    }

    pub fn words(severity: Severity, applicability: Applicability, words: &[&str]) -> Self {
        let ws = words.iter().map(|w| w.to_string()).collect();
        RuleConfig::new(severity, applicability).with_value(RuleValue::Words(ws))
    }

    pub fn text(severity: Severity, applicability: Applicability, text: &str) -> Self {
        RuleConfig::new(severity, applicability).with_value(RuleValue::Text(text.to_string()))
    }
}

impl Serialize for RuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(v) = &self.value {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

struct RuleConfigVisitor;

impl<'de> Visitor<'de> for RuleConfigVisitor {
    type Value = RuleConfig;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rule array [severity, applicability?, value?]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleConfig, A::Error> {
        let severity: Severity = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let applicability: Applicability = seq.next_element()?.unwrap_or_default();
        let value: Option<RuleValue> = seq.next_element()?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }
        Ok(RuleConfig {
            severity,
            applicability,
            value,
        })
    }
}

impl<'de> Deserialize<'de> for RuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RuleConfigVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A named base rule-set list plus rule overrides.
///
/// This is both the shape of the built-in configuration and of
/// `.commitlintrc.*` files; registry entries use it too.
pub struct RuleOverrideSet {
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ignores: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_triple_from_json_and_toml() {
        let rc: RuleConfig = serde_json::from_str(r#"[2, "always", 120]"#).unwrap();
        assert_eq!(rc, RuleConfig::limit(Severity::Error, Applicability::Always, 120));

        let set: RuleOverrideSet = toml::from_str(
            r#"
extends = ["@commitlint/config-conventional"]
[rules]
"header-max-length" = [2, "always", 120]
"subject-case" = ["warn", "never", ["upper-case"]]
"header-trim" = [0]
            "#,
        )
        .unwrap();
        assert_eq!(set.extends, vec!["@commitlint/config-conventional"]);
        assert_eq!(
            set.rules["subject-case"],
            RuleConfig::words(Severity::Warning, Applicability::Never, &["upper-case"])
        );
        // applicability defaults to always when omitted
        assert_eq!(
            set.rules["header-trim"],
            RuleConfig::new(Severity::Disabled, Applicability::Always)
        );
    }

    #[test]
    fn test_rule_triple_rejects_bad_severity_and_extra_items() {
        assert!(serde_json::from_str::<RuleConfig>(r#"[3, "always"]"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>(r#"["fatal"]"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>(r#"[2, "sometimes"]"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>(r#"[2, "always", 1, 2]"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>("[]").is_err());
    }

    #[test]
    fn test_rule_triple_serializes_as_array() {
        let rc = RuleConfig::limit(Severity::Error, Applicability::Always, 220);
        assert_eq!(serde_json::to_string(&rc).unwrap(), r#"[2,"always",220]"#);
        let bare = RuleConfig::new(Severity::Warning, Applicability::Never);
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#"[1,"never"]"#);
    }
}
