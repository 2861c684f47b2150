//! Compiled views of the pattern libraries, built once per process

use crate::patterns::{
    ClaimPattern, ConstraintRule, DomainIndicator, DriftPattern, DriftRule, LabeledPattern,
    CONSTRAINT_RULES, CRO_PATTERNS, DOMAIN_INDICATORS, DRIFT_RULES, ENGAGEMENT_PATTERNS,
    FLUFF_PHRASES, INVENTED_CLAIM_PATTERNS, MECHANISM_TERMS,
};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// A table entry paired with its compiled regex
pub(crate) struct Compiled<T: 'static> {
    pub regex: Regex,
    pub entry: &'static T,
}

pub(crate) struct CompiledDriftRule {
    pub rule: &'static DriftRule,
    pub indicators: Vec<Regex>,
    pub drift: Vec<Compiled<DriftPattern>>,
}

pub(crate) struct CompiledConstraintRule {
    pub rule: &'static ConstraintRule,
    pub claims: Vec<Regex>,
}

/// Compile case-insensitively; an invalid pattern is logged and skipped
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(pattern, error = %e, "invalid pattern skipped");
            None
        }
    }
}

/// Regex for a literal term, word-bounded on whichever ends are word characters
pub(crate) fn word_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let end = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    format!("{}{}{}", start, escaped, end)
}

fn compile_table<T: 'static>(entries: &'static [T], pattern: impl Fn(&T) -> String) -> Vec<Compiled<T>> {
    entries
        .iter()
        .filter_map(|entry| {
            compile(&pattern(entry)).map(|regex| Compiled { regex, entry })
        })
        .collect()
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| compile(p)).collect()
}

pub(crate) fn invented_claims() -> &'static [Compiled<ClaimPattern>] {
    static CELL: OnceLock<Vec<Compiled<ClaimPattern>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(INVENTED_CLAIM_PATTERNS, |e| e.pattern.to_string()))
}

pub(crate) fn fluff_phrases() -> &'static [Compiled<&'static str>] {
    static CELL: OnceLock<Vec<Compiled<&'static str>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(FLUFF_PHRASES, |term| word_pattern(term)))
}

pub(crate) fn engagement_patterns() -> &'static [Compiled<&'static str>] {
    static CELL: OnceLock<Vec<Compiled<&'static str>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(ENGAGEMENT_PATTERNS, |p| p.to_string()))
}

pub(crate) fn mechanism_terms() -> &'static [Compiled<&'static str>] {
    static CELL: OnceLock<Vec<Compiled<&'static str>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(MECHANISM_TERMS, |term| word_pattern(term)))
}

pub(crate) fn cro_patterns() -> &'static [Compiled<LabeledPattern>] {
    static CELL: OnceLock<Vec<Compiled<LabeledPattern>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(CRO_PATTERNS, |e| e.pattern.to_string()))
}

pub(crate) fn domain_indicators() -> &'static [Compiled<DomainIndicator>] {
    static CELL: OnceLock<Vec<Compiled<DomainIndicator>>> = OnceLock::new();
    CELL.get_or_init(|| compile_table(DOMAIN_INDICATORS, |e| e.pattern.to_string()))
}

pub(crate) fn drift_rules() -> &'static [CompiledDriftRule] {
    static CELL: OnceLock<Vec<CompiledDriftRule>> = OnceLock::new();
    CELL.get_or_init(|| {
        DRIFT_RULES
            .iter()
            .map(|rule| CompiledDriftRule {
                rule,
                indicators: compile_all(rule.context_indicators),
                drift: compile_table(rule.drift, |d| d.pattern.to_string()),
            })
            .collect()
    })
}

pub(crate) fn constraint_rules() -> &'static [CompiledConstraintRule] {
    static CELL: OnceLock<Vec<CompiledConstraintRule>> = OnceLock::new();
    CELL.get_or_init(|| {
        CONSTRAINT_RULES
            .iter()
            .map(|rule| CompiledConstraintRule {
                rule,
                claims: compile_all(rule.claims),
            })
            .collect()
    })
}
