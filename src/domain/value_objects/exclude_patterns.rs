//! Clean-exclusion patterns value object
//!
//! Patterns naming staged files the clean pass must preserve. They arrive
//! either as a literal list of patterns or as a single JSON-encoded array,
//! the form CI pipelines pass through an input string. A malformed JSON
//! payload downgrades to a warning and an empty set - it never aborts a
//! deployment.

/// Raw clean-exclusion input, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanExclude {
    /// Patterns supplied directly as a list
    List(Vec<String>),
    /// Patterns supplied as one JSON-encoded array of strings
    Json(String),
}

/// Parsed set of path patterns to preserve during a clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludePatterns {
    patterns: Vec<String>,
}

impl ExcludePatterns {
    /// Create an empty pattern set (preserves nothing beyond the forced excludes).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw exclusion input.
    ///
    /// Returns the pattern set and, for a malformed JSON payload, a warning
    /// message describing why the set is empty.
    pub fn parse(raw: &CleanExclude) -> (Self, Option<String>) {
        match raw {
            CleanExclude::List(items) => (
                Self {
                    patterns: items.clone(),
                },
                None,
            ),
            CleanExclude::Json(text) => match serde_json::from_str::<Vec<String>>(text) {
                Ok(patterns) => (Self { patterns }, None),
                Err(e) => (
                    Self::empty(),
                    Some(format!(
                        "failed to parse clean exclude list '{}': {} - continuing with no exclusions",
                        text, e
                    )),
                ),
            },
        }
    }

    /// Iterate over the patterns.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
