//! Project name handling: sanitisation, validation and the derived forms
//! substituted into the generated project.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));

static VALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Removes every character outside `[A-Za-z0-9_-]`.
///
/// Sanitising an already sanitised name returns it unchanged.
pub fn sanitize(input: &str) -> String {
    DISALLOWED.replace_all(input.trim(), "").into_owned()
}

/// A validated project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Sanitises `input` and rejects it if nothing is left.
    pub fn parse(input: &str) -> Result<Self> {
        let sanitized = sanitize(input);
        if !VALID.is_match(&sanitized) {
            return Err(Error::InvalidName { input: input.to_string() });
        }
        Ok(Self(sanitized))
    }

    /// Like [`ProjectName::parse`], but empty or sanitised-to-empty input
    /// falls back to `default`.
    pub fn parse_or(input: &str, default: &str) -> Result<Self> {
        if sanitize(input).is_empty() {
            Self::parse(default)
        } else {
            Self::parse(input)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Words of the name, split on separators and case changes:
    /// `HTTPServer_v2` → `HTTP`, `Server`, `v2`. Digits stay with the word
    /// they follow.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        for chunk in self.0.split(['_', '-']).filter(|chunk| !chunk.is_empty()) {
            let bytes = chunk.as_bytes();
            let mut start = 0;
            for i in 1..bytes.len() {
                let (prev, cur) = (bytes[i - 1], bytes[i]);
                let next_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
                let boundary = cur.is_ascii_uppercase()
                    && (prev.is_ascii_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_ascii_uppercase() && next_lower));
                if boundary {
                    words.push(&chunk[start..i]);
                    start = i;
                }
            }
            words.push(&chunk[start..]);
        }
        words
    }

    /// Words joined by spaces and capitalised, acronyms kept:
    /// `my_cool-app` → `My Cool App`, `HTTPServer` → `HTTP Server`.
    /// A name made only of separators is used as is.
    pub fn title(&self) -> String {
        let words = self.words();
        if words.is_empty() {
            return self.0.clone();
        }
        words.into_iter().map(capitalize).collect::<Vec<_>>().join(" ")
    }

    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// Snake-case form, suitable as a database name: `api-v2` → `api_v2`.
    pub fn snake(&self) -> String {
        let words = self.words();
        if words.is_empty() {
            return self.lowercase();
        }
        words.join("_").to_lowercase()
    }
}

fn capitalize(word: &str) -> String {
    if word.len() > 1 && !word.bytes().any(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
