// Keyword groups: words inside a group are ANDed, groups inside a set are ORed
use crate::parser::parse_keyword_set;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("keyword string is empty")]
    Empty,
    #[error("invalid keyword pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A single keyword. It is a search pattern, not a literal: regular-expression
/// syntax in the source is interpreted, and matching ignores case.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    source: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn new(source: &str) -> Result<Self, KeywordError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| KeywordError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_found_in(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for KeywordPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for KeywordPattern {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    patterns: Vec<KeywordPattern>,
}

impl KeywordGroup {
    pub(crate) fn new(patterns: Vec<KeywordPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[KeywordPattern] {
        &self.patterns
    }

    pub fn words(&self) -> Vec<&str> {
        self.patterns.iter().map(KeywordPattern::as_str).collect()
    }

    /// Human-readable name of the group, used in the report summary.
    pub fn label(&self) -> String {
        self.words().join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    groups: Vec<KeywordGroup>,
}

impl KeywordSet {
    pub(crate) fn new(groups: Vec<KeywordGroup>) -> Self {
        Self { groups }
    }

    pub fn parse(raw: &str) -> Result<Self, KeywordError> {
        parse_keyword_set(raw)
    }

    /// Groups in declaration order.
    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }
}

impl FromStr for KeywordSet {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keyword_set(s)
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.groups.iter().map(KeywordGroup::label).collect();
        write!(f, "{}", labels.join("; "))
    }
}

/// The two keyword sets used by one run.
#[derive(Debug, Clone)]
pub struct SearchKeywords {
    pub events: KeywordSet,
    pub offers: KeywordSet,
}
