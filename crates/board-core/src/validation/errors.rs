//! Structured validation error mapping

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping of wire error codes to human-readable messages
///
/// Multiple errors may be reported together in one response. Inserting the
/// same code twice keeps a single entry, which also gives merge the dedupe
/// behavior the composed leaderboard check relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error under a wire code
    pub fn insert(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.0.insert(code.into(), message.into());
    }

    /// Fold another error mapping into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "validation failed: [{}]", codes.join(", "))
    }
}
