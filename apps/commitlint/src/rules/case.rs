//! Letter-case conventions used by `type-case`, `scope-case` and `subject-case`.
//!
//! A string is "in" a case when converting it to that case leaves it unchanged.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    pub fn from_name(name: &str) -> Option<Case> {
        match name {
            "lower-case" | "lowercase" => Some(Case::Lower),
            "upper-case" | "uppercase" => Some(Case::Upper),
            "camel-case" => Some(Case::Camel),
            "kebab-case" => Some(Case::Kebab),
            "pascal-case" => Some(Case::Pascal),
            "sentence-case" | "sentencecase" => Some(Case::Sentence),
            "snake-case" => Some(Case::Snake),
            "start-case" => Some(Case::Start),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Lower => "lower-case",
            Case::Upper => "upper-case",
            Case::Camel => "camel-case",
            Case::Kebab => "kebab-case",
            Case::Pascal => "pascal-case",
            Case::Sentence => "sentence-case",
            Case::Snake => "snake-case",
            Case::Start => "start-case",
        }
    }

    /// Convert `input` to this case.
    pub fn apply(self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Camel => words(input)
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect(),
            Case::Pascal => words(input).iter().map(|w| capitalize(w)).collect(),
            Case::Kebab => join_lower(input, "-"),
            Case::Snake => join_lower(input, "_"),
            Case::Start => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
            Case::Sentence => {
                let first = input.split(' ').next().unwrap_or_default();
                let mut chars = first.chars();
                let mut out = String::with_capacity(input.len());
                if let Some(c) = chars.next() {
                    out.extend(c.to_uppercase());
                }
                out.push_str(&chars.as_str().to_lowercase());
                out.push_str(&input[first.len()..]);
                out
            }
        }
    }

    pub fn matches(self, input: &str) -> bool {
        self.apply(input) == input
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split into words on non-alphanumeric characters and lower-to-upper transitions.
fn words(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
            }
            prev = None;
            continue;
        }
        if let Some(p) = prev {
            if c.is_uppercase() && (p.is_lowercase() || p.is_numeric()) && !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
            }
        }
        cur.push(c);
        prev = Some(c);
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

fn join_lower(input: &str, sep: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
