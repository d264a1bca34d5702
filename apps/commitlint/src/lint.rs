//! Lint runner for commit messages.
//!
//! Produces a `LintOutcome` per message. Error-severity problems make the
//! outcome invalid; warnings are reported without failing it. Several
//! messages can be linted in parallel against one shared `ResolvedConfig`.

use crate::message;
use crate::models::{LintOutcome, LintReport, Problem, Severity};
use crate::registry::ResolvedConfig;
use crate::rules;
use rayon::prelude::*;

/// Whether `message` matches one of the configured ignore patterns.
pub fn is_ignored(message: &str, cfg: &ResolvedConfig) -> bool {
    let text = message::strip_comments(message);
    cfg.ignores.iter().any(|re| re.is_match(&text))
}

/// Lint a single commit message.
///
/// Problems are reported in rule-name order. Ignored messages are valid and
/// carry no problems.
pub fn lint(message: &str, cfg: &ResolvedConfig) -> LintOutcome {
    let commit = message::parse(message);
    if is_ignored(message, cfg) {
        return LintOutcome {
            source: String::new(),
            input: commit.raw,
            valid: true,
            ignored: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        };
    }

    let problems: Vec<Problem> = cfg
        .rules
        .iter()
        .filter_map(|rule| rules::evaluate(rule, &commit))
        .collect();
    let (errors, warnings): (Vec<Problem>, Vec<Problem>) = problems
        .into_iter()
        .partition(|p| p.level == Severity::Error);

    LintOutcome {
        source: String::new(),
        input: commit.raw,
        valid: errors.is_empty(),
        ignored: false,
        errors,
        warnings,
    }
}

/// Lint `(source, message)` pairs in parallel; results keep input order.
pub fn run_lint(inputs: &[(String, String)], cfg: &ResolvedConfig) -> LintReport {
    let results: Vec<LintOutcome> = inputs
        .par_iter()
        .map(|(source, text)| {
            let mut outcome = lint(text, cfg);
            outcome.source = source.clone();
            outcome
        })
        .collect();
    LintReport::new(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleOverrideSet;
    use crate::provider::configuration;
    use crate::registry::RuleSetRegistry;

    fn builtin() -> ResolvedConfig {
        RuleSetRegistry::builtin().resolve(&configuration()).unwrap()
    }

    fn names(problems: &[Problem]) -> Vec<&str> {
        problems.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_header_of_120_chars_passes_and_121_fails() {
        let cfg = builtin();
        let ok = format!("feat: {}", "a".repeat(114));
        assert_eq!(ok.chars().count(), 120);
        let out = lint(&ok, &cfg);
        assert!(out.valid, "{:?}", out.errors);

        let bad = format!("feat: {}", "a".repeat(115));
        let out = lint(&bad, &cfg);
        assert!(!out.valid);
        assert_eq!(names(&out.errors), vec!["header-max-length"]);
        assert!(out.errors[0].message.contains("120"));
        assert_eq!(out.errors[0].level, Severity::Error);
    }

    #[test]
    fn test_bare_header_length_boundary_only_reports_other_rules() {
        let cfg = builtin();
        let out = lint(&"a".repeat(120), &cfg);
        assert!(!names(&out.errors).contains(&"header-max-length"));
        let out = lint(&"a".repeat(121), &cfg);
        assert!(names(&out.errors).contains(&"header-max-length"));
    }

    #[test]
    fn test_body_line_of_220_chars_passes_and_221_fails() {
        let cfg = builtin();
        let ok = format!("fix: wrap output\n\n{}", "b".repeat(220));
        let out = lint(&ok, &cfg);
        assert!(out.valid, "{:?}", out.errors);
        assert!(out.warnings.is_empty());

        let bad = format!("fix: wrap output\n\n{}", "b".repeat(221));
        let out = lint(&bad, &cfg);
        assert_eq!(names(&out.errors), vec!["body-max-line-length"]);
        assert!(out.errors[0].message.contains("220"));
    }

    #[test]
    fn test_body_paragraph_starting_with_label_keeps_body_limit() {
        let cfg = builtin();
        let line = format!("Context: {}", "b".repeat(211));
        assert_eq!(line.chars().count(), 220);
        let out = lint(&format!("fix: wrap output\n\n{}", line), &cfg);
        assert!(out.valid, "{:?}", out.errors);

        let line = format!("Context: {}", "b".repeat(212));
        let out = lint(&format!("fix: wrap output\n\n{}", line), &cfg);
        assert_eq!(names(&out.errors), vec!["body-max-line-length"]);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let cfg = builtin();
        let out = lint("fix: tidy\nno blank line before body", &cfg);
        assert!(out.valid);
        assert_eq!(names(&out.warnings), vec!["body-leading-blank"]);
    }

    #[test]
    fn test_conventional_violations_in_rule_order() {
        let cfg = builtin();
        let out = lint("Feature: Add thing.", &cfg);
        assert!(!out.valid);
        assert_eq!(
            names(&out.errors),
            vec!["subject-case", "subject-full-stop", "type-case", "type-enum"]
        );
    }

    #[test]
    fn test_default_ignores() {
        let cfg = builtin();
        for msg in [
            "Merge branch 'main' into feature",
            "Merge pull request #12 from org/branch",
            "Revert \"feat: thing\"",
            "fixup! feat: thing",
            "v1.2.3",
        ] {
            let out = lint(msg, &cfg);
            assert!(out.ignored, "{} not ignored", msg);
            assert!(out.valid);
        }
        assert!(!lint("bogus message", &cfg).ignored);
    }

    #[test]
    fn test_custom_ignores_and_disabled_defaults() {
        let mut set = configuration();
        set.default_ignores = Some(false);
        set.ignores = vec!["^WIP".into()];
        let cfg = RuleSetRegistry::builtin().resolve(&set).unwrap();
        assert!(lint("WIP: poke", &cfg).ignored);
        assert!(!lint("fixup! feat: thing", &cfg).ignored);
    }

    #[test]
    fn test_empty_config_accepts_anything() {
        let cfg = RuleSetRegistry::empty()
            .resolve(&RuleOverrideSet {
                default_ignores: Some(false),
                ..RuleOverrideSet::default()
            })
            .unwrap();
        let out = lint("whatever", &cfg);
        assert!(out.valid && out.errors.is_empty() && out.warnings.is_empty());
    }

    #[test]
    fn test_run_lint_keeps_order_and_summarizes() {
        let cfg = builtin();
        let inputs = vec![
            ("a.txt".to_string(), "feat: ok".to_string()),
            ("b.txt".to_string(), "nope".to_string()),
            ("c.txt".to_string(), "Merge branch 'x'".to_string()),
        ];
        let report = run_lint(&inputs, &cfg);
        let sources: Vec<&str> = report.results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(report.summary.inputs, 3);
        assert_eq!(report.summary.ignored, 1);
        // "nope": subject-empty and type-empty
        assert_eq!(report.summary.errors, 2);
    }
}
