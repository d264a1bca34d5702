//! Per-rule conditions.
//!
//! Each check reports whether its condition holds plus a message phrased for
//! the configured applicability. `None` means the rule does not apply to this
//! commit (for example a length rule on an absent body) and passes.

use super::{Case, RuleArg, RuleKind};
use crate::message::Commit;
use crate::models::Applicability;

pub(super) struct Verdict {
    pub holds: bool,
    pub message: String,
}

fn must(app: Applicability) -> &'static str {
    match app {
        Applicability::Always => "must",
        Applicability::Never => "must not",
    }
}

fn may(app: Applicability) -> &'static str {
    match app {
        Applicability::Always => "must",
        Applicability::Never => "may not",
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(super) fn check(
    kind: RuleKind,
    arg: &RuleArg,
    app: Applicability,
    commit: &Commit,
) -> Option<Verdict> {
    use RuleKind::*;
    match kind {
        BodyEmpty => empty("body", commit.body.as_deref(), app),
        FooterEmpty => empty("footer", commit.footer.as_deref(), app),
        ScopeEmpty => empty("scope", commit.scope.as_deref(), app),
        SubjectEmpty => empty("subject", commit.subject.as_deref(), app),
        TypeEmpty => empty("type", commit.kind.as_deref(), app),

        BodyLeadingBlank => {
            commit.body.as_ref()?;
            Some(Verdict {
                holds: commit.body_leading_blank,
                message: format!("body {} have leading blank line", may(app)),
            })
        }
        FooterLeadingBlank => {
            commit.footer.as_ref()?;
            Some(Verdict {
                holds: commit.footer_leading_blank,
                message: format!("footer {} have leading blank line", may(app)),
            })
        }
        HeaderTrim => Some(Verdict {
            holds: commit.header.trim() == commit.header,
            message: match app {
                Applicability::Always => "header must not be surrounded by whitespace".into(),
                Applicability::Never => "header must be surrounded by whitespace".into(),
            },
        }),

        BodyMaxLength => max_length("body", commit.body.as_deref(), arg, app),
        FooterMaxLength => max_length("footer", commit.footer.as_deref(), arg, app),
        HeaderMaxLength => max_length("header", Some(commit.header.as_str()), arg, app),
        ScopeMaxLength => max_length("scope", commit.scope.as_deref(), arg, app),
        SubjectMaxLength => max_length("subject", commit.subject.as_deref(), arg, app),
        TypeMaxLength => max_length("type", commit.kind.as_deref(), arg, app),

        BodyMinLength => min_length("body", commit.body.as_deref(), arg, app),
        FooterMinLength => min_length("footer", commit.footer.as_deref(), arg, app),
        HeaderMinLength => min_length("header", Some(commit.header.as_str()), arg, app),

        BodyMaxLineLength => max_line_length("body", commit.body.as_deref(), arg, app),
        FooterMaxLineLength => max_line_length("footer", commit.footer.as_deref(), arg, app),

        BodyFullStop => full_stop("body", commit.body.as_deref(), arg, app),
        HeaderFullStop => full_stop("header", Some(commit.header.as_str()), arg, app),
        SubjectFullStop => full_stop("subject", commit.subject.as_deref(), arg, app),

        TypeCase => {
            let ty = commit.kind.as_deref()?;
            case_of("type", &[ty], arg, app)
        }
        ScopeCase => {
            let scope = commit.scope.as_deref()?;
            case_of("scope", &split_scopes(scope), arg, app)
        }
        SubjectCase => {
            let subject = commit.subject.as_deref()?;
            if !subject.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return None;
            }
            case_of("subject", &[subject], arg, app)
        }

        TypeEnum => {
            let ty = commit.kind.as_deref()?;
            one_of("type", &[ty], arg, app)
        }
        ScopeEnum => {
            let scope = commit.scope.as_deref()?;
            one_of("scope", &split_scopes(scope), arg, app)
        }
    }
}

fn empty(part: &str, value: Option<&str>, app: Applicability) -> Option<Verdict> {
    Some(Verdict {
        holds: value.map_or(true, |v| v.trim().is_empty()),
        message: format!("{} {} be empty", part, may(app)),
    })
}

fn limit(arg: &RuleArg) -> Option<usize> {
    match arg {
        RuleArg::Limit(n) => Some(*n),
        _ => None,
    }
}

fn max_length(part: &str, value: Option<&str>, arg: &RuleArg, app: Applicability) -> Option<Verdict> {
    let value = value?;
    let max = limit(arg)?;
    let len = char_len(value);
    let message = match app {
        Applicability::Always => format!(
            "{} must not be longer than {} characters, current length is {}",
            part, max, len
        ),
        Applicability::Never => format!(
            "{} must be longer than {} characters, current length is {}",
            part, max, len
        ),
    };
    Some(Verdict {
        holds: len <= max,
        message,
    })
}

fn min_length(part: &str, value: Option<&str>, arg: &RuleArg, app: Applicability) -> Option<Verdict> {
    let value = value?;
    let min = limit(arg)?;
    let len = char_len(value);
    let message = match app {
        Applicability::Always => format!(
            "{} must not be shorter than {} characters, current length is {}",
            part, min, len
        ),
        Applicability::Never => format!(
            "{} must be shorter than {} characters, current length is {}",
            part, min, len
        ),
    };
    Some(Verdict {
        holds: len >= min,
        message,
    })
}

fn max_line_length(
    part: &str,
    value: Option<&str>,
    arg: &RuleArg,
    app: Applicability,
) -> Option<Verdict> {
    let value = value?;
    let max = limit(arg)?;
    let longest = value.lines().map(char_len).max().unwrap_or(0);
    let message = match app {
        Applicability::Always => format!(
            "{}'s lines must not be longer than {} characters",
            part, max
        ),
        Applicability::Never => format!("{}'s lines must be longer than {} characters", part, max),
    };
    Some(Verdict {
        holds: longest <= max,
        message,
    })
}

fn full_stop(part: &str, value: Option<&str>, arg: &RuleArg, app: Applicability) -> Option<Verdict> {
    let value = value?.trim_end();
    let stop = match arg {
        RuleArg::Text(s) => s.as_str(),
        _ => ".",
    };
    Some(Verdict {
        holds: value.ends_with(stop),
        message: format!("{} {} end with full stop", part, may(app)),
    })
}

fn split_scopes(scope: &str) -> Vec<&str> {
    scope
        .split(|c| c == '/' || c == '\\' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn case_of(part: &str, values: &[&str], arg: &RuleArg, app: Applicability) -> Option<Verdict> {
    let cases: &[Case] = match arg {
        RuleArg::Cases(cs) => cs,
        _ => return None,
    };
    let in_any = |v: &str| cases.iter().any(|c| c.matches(v));
    let holds = match app {
        // every value must be in one of the cases
        Applicability::Always => values.iter().all(|&v| in_any(v)),
        // fails as soon as one value is in a forbidden case
        Applicability::Never => values.iter().any(|&v| in_any(v)),
    };
    let names: Vec<&str> = cases.iter().map(|c| c.name()).collect();
    Some(Verdict {
        holds,
        message: format!("{} {} be {}", part, must(app), names.join(", ")),
    })
}

fn one_of(part: &str, values: &[&str], arg: &RuleArg, app: Applicability) -> Option<Verdict> {
    let allowed: &[String] = match arg {
        RuleArg::Words(ws) if !ws.is_empty() => ws,
        _ => return None,
    };
    let listed = |v: &str| allowed.iter().any(|a| a == v);
    let holds = match app {
        Applicability::Always => values.iter().all(|&v| listed(v)),
        Applicability::Never => values.iter().any(|&v| listed(v)),
    };
    Some(Verdict {
        holds,
        message: format!("{} {} be one of [{}]", part, must(app), allowed.join(", ")),
    })
}
