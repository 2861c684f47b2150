//! Grounding corpus built from a context snapshot

use crate::compiled::{compile, word_pattern};
use copyguard_core::ContextSnapshot;
use regex::Regex;

/// Every string value from the context, searchable case-insensitively.
///
/// A term that appears here is "grounded": the business supplied it, so
/// generated copy may use it.
#[derive(Debug, Clone, Default)]
pub struct ContextCorpus {
    values: Vec<String>,
    haystack: String,
}

impl ContextCorpus {
    pub fn from_snapshot(snapshot: &ContextSnapshot) -> Self {
        Self::from_values(snapshot.context_values())
    }

    pub fn from_values(values: Vec<String>) -> Self {
        let haystack = values
            .iter()
            .map(|v| v.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        Self { values, haystack }
    }

    /// Case-insensitive, word-bounded test; blank terms are never grounded.
    ///
    /// "app" is not grounded by "happy", nor "api" by "therapist".
    pub fn contains(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() || !self.haystack.contains(&term) {
            return false;
        }
        compile(&word_pattern(&term)).is_some_and(|re| re.is_match(&self.haystack))
    }

    pub fn is_match(&self, regex: &Regex) -> bool {
        regex.is_match(&self.haystack)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
