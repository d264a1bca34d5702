//! Commit message parsing.
//!
//! Splits a raw message into header, body and footer and extracts the
//! conventional-commit `type(scope)!: subject` parts from the header.
//!
//! - Lines starting with `#` are git comments and are dropped.
//! - Everything from the git scissors line down is dropped.
//! - The footer starts at the first paragraph whose first line is a
//!   `BREAKING CHANGE:` note, an issue-closing reference (`Closes #12`,
//!   `Fixes #3`) or a well-known git trailer (`Refs:`, `Signed-off-by:`).

use regex::Regex;
use std::sync::LazyLock;

const SCISSORS: &str = "# ------------------------ >8 ------------------------";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w*)(?:\((.*)\))?(!?): (.*)$").expect("header pattern is valid")
});

/// Footer openers: breaking-change notes, issue-closing references and
/// well-known git trailers. Other `Word: text` lines stay in the body.
static TRAILER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:BREAKING[ -]CHANGE: ",
        r"|(?i:close[sd]?|fix(?:e[sd])?|resolve[sd]?) #\d",
        r"|(?i:refs|signed-off-by|co-authored-by|reviewed-by|acked-by|tested-by|reported-by|helped-by): )",
    ))
    .expect("trailer pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A parsed commit message.
pub struct Commit {
    /// Message text with comments removed and surrounding blank lines trimmed.
    pub raw: String,
    pub header: String,
    pub kind: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
    pub breaking: bool,
    /// Whether the line right after the header is blank (true when there is no body).
    pub body_leading_blank: bool,
    /// Whether the line right before the footer is blank (true when there is no footer).
    pub footer_leading_blank: bool,
}

/// Remove comment lines and the scissors section; trim blank lines at both ends.
pub fn strip_comments(message: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for line in message.lines() {
        if line.trim_end() == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        kept.push(line);
    }
    let start = kept
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(kept.len());
    let end = kept
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    kept[start..end.max(start)].join("\n")
}

/// Parse a raw commit message.
pub fn parse(message: &str) -> Commit {
    let raw = strip_comments(message);
    let lines: Vec<&str> = raw.split('\n').collect();
    let header = lines.first().copied().unwrap_or_default().to_string();
    let rest = if lines.len() > 1 { &lines[1..] } else { &[][..] };

    let mut commit = Commit {
        header: header.clone(),
        body_leading_blank: true,
        footer_leading_blank: true,
        ..Commit::default()
    };

    if let Some(caps) = HEADER_PATTERN.captures(&header) {
        commit.kind = non_empty(caps.get(1).map(|m| m.as_str()));
        commit.scope = non_empty(caps.get(2).map(|m| m.as_str()));
        commit.breaking = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
        commit.subject = non_empty(caps.get(4).map(|m| m.as_str()));
    }

    let footer_start = rest.iter().enumerate().position(|(i, line)| {
        (i == 0 || rest[i - 1].trim().is_empty()) && TRAILER_PATTERN.is_match(line)
    });
    let (body_lines, footer_lines) = match footer_start {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, &[][..]),
    };

    let body = join_trimmed(body_lines);
    if body.is_some() {
        commit.body_leading_blank = rest.first().is_some_and(|l| l.trim().is_empty());
    }
    commit.body = body;

    if let Some(i) = footer_start {
        commit.footer_leading_blank = i > 0 && rest[i - 1].trim().is_empty();
        commit.footer = join_trimmed(footer_lines);
        if footer_lines
            .iter()
            .any(|l| l.starts_with("BREAKING CHANGE") || l.starts_with("BREAKING-CHANGE"))
        {
            commit.breaking = true;
        }
    }

    commit.raw = raw;
    commit
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|v| !v.is_empty()).map(str::to_string)
}

fn join_trimmed(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let end = lines.iter().rposition(|l| !l.trim().is_empty())? + 1;
    Some(lines[start..end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conventional_header() {
        let c = parse("feat(parser)!: add arrays");
        assert_eq!(c.kind.as_deref(), Some("feat"));
        assert_eq!(c.scope.as_deref(), Some("parser"));
        assert_eq!(c.subject.as_deref(), Some("add arrays"));
        assert!(c.breaking);
        assert!(c.body.is_none());
        assert!(c.footer.is_none());
    }

    #[test]
    fn test_parse_non_conventional_header() {
        let c = parse("just some words");
        assert_eq!(c.header, "just some words");
        assert!(c.kind.is_none());
        assert!(c.subject.is_none());
    }

    #[test]
    fn test_parse_body_and_footer() {
        let msg = "fix: handle eof\n\nThe reader stopped early.\nNow it does not.\n\nRefs: #12\nBREAKING CHANGE: reader API changed\n";
        let c = parse(msg);
        assert_eq!(
            c.body.as_deref(),
            Some("The reader stopped early.\nNow it does not.")
        );
        assert_eq!(
            c.footer.as_deref(),
            Some("Refs: #12\nBREAKING CHANGE: reader API changed")
        );
        assert!(c.breaking);
        assert!(c.body_leading_blank);
        assert!(c.footer_leading_blank);
    }

    #[test]
    fn test_parse_prose_paragraph_with_colon_stays_in_body() {
        let c = parse("fix: a\n\nContext: the old reader\n\nNote: see below\n\nFixes #7");
        assert_eq!(
            c.body.as_deref(),
            Some("Context: the old reader\n\nNote: see below")
        );
        assert_eq!(c.footer.as_deref(), Some("Fixes #7"));

        let c = parse("fix: a\n\nBefore: 3s\nAfter: 1s");
        assert!(c.footer.is_none());
        assert_eq!(c.body.as_deref(), Some("Before: 3s\nAfter: 1s"));

        let c = parse("fix: a\n\nbody\n\nSigned-off-by: Dev <dev@example.com>");
        assert_eq!(c.footer.as_deref(), Some("Signed-off-by: Dev <dev@example.com>"));
    }

    #[test]
    fn test_parse_missing_blank_lines() {
        let c = parse("fix: a\nbody right away");
        assert_eq!(c.body.as_deref(), Some("body right away"));
        assert!(!c.body_leading_blank);

        let c = parse("fix: a\nCloses #3");
        assert!(c.body.is_none());
        assert_eq!(c.footer.as_deref(), Some("Closes #3"));
        assert!(!c.footer_leading_blank);
    }

    #[test]
    fn test_strip_comments_and_scissors() {
        let msg = "\n# Please enter the commit message\nfeat: x\n\nbody\n# comment\n# ------------------------ >8 ------------------------\ndiff --git a b\n";
        assert_eq!(strip_comments(msg), "feat: x\n\nbody");
        let c = parse(msg);
        assert_eq!(c.header, "feat: x");
        assert_eq!(c.body.as_deref(), Some("body"));
    }

    #[test]
    fn test_parse_empty_message() {
        let c = parse("# only a comment\n");
        assert_eq!(c.raw, "");
        assert_eq!(c.header, "");
        assert!(c.body.is_none());
    }
}
