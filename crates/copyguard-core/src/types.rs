//! Validation and repair result types

use serde::{Deserialize, Serialize};

/// Severity level for a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Sort rank, errors first
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
        }
    }
}

/// The action a caller should take to resolve a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixAction {
    /// Delete the offending phrase in place, no generator call needed
    RemovePhrase,
    /// Rewrite the claim into something the context supports
    RewriteDefensible,
    /// Rewrite while honouring the budget/resource limits in context
    RewriteWithConstraints,
    /// Regenerate with a stricter prompt
    RegenerateStricter,
}

impl FixAction {
    /// Lower is cheaper and preferred
    pub fn priority(self) -> u8 {
        match self {
            FixAction::RemovePhrase => 0,
            FixAction::RewriteWithConstraints => 1,
            FixAction::RewriteDefensible => 2,
            FixAction::RegenerateStricter => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FixAction::RemovePhrase => "remove_phrase",
            FixAction::RewriteDefensible => "rewrite_defensible",
            FixAction::RewriteWithConstraints => "rewrite_with_constraints",
            FixAction::RegenerateStricter => "regenerate_stricter",
        }
    }
}

/// The kind of issue a warning reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    BannedPhrase,
    InventedClaim,
    GenericFluff,
    ConstraintViolation,
    CategoryDrift,
    DomainMismatch,
    QualityTooShort,
    QualityTooLong,
    QualityPlaceholder,
}

impl WarningType {
    /// Fixed type -> action table
    pub fn default_action(self) -> FixAction {
        match self {
            WarningType::BannedPhrase => FixAction::RemovePhrase,
            WarningType::InventedClaim => FixAction::RewriteDefensible,
            WarningType::GenericFluff => FixAction::RegenerateStricter,
            WarningType::ConstraintViolation => FixAction::RewriteWithConstraints,
            WarningType::CategoryDrift => FixAction::RewriteDefensible,
            WarningType::DomainMismatch => FixAction::RewriteDefensible,
            WarningType::QualityTooShort => FixAction::RegenerateStricter,
            WarningType::QualityTooLong => FixAction::RewriteWithConstraints,
            WarningType::QualityPlaceholder => FixAction::RegenerateStricter,
        }
    }

    /// Constraint and quality problems block acceptance; the rest are advisory
    pub fn default_severity(self) -> Severity {
        match self {
            WarningType::ConstraintViolation
            | WarningType::QualityTooShort
            | WarningType::QualityTooLong
            | WarningType::QualityPlaceholder => Severity::Error,
            WarningType::BannedPhrase
            | WarningType::InventedClaim
            | WarningType::GenericFluff
            | WarningType::CategoryDrift
            | WarningType::DomainMismatch => Severity::Warning,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WarningType::BannedPhrase => "banned_phrase",
            WarningType::InventedClaim => "invented_claim",
            WarningType::GenericFluff => "generic_fluff",
            WarningType::ConstraintViolation => "constraint_violation",
            WarningType::CategoryDrift => "category_drift",
            WarningType::DomainMismatch => "domain_mismatch",
            WarningType::QualityTooShort => "quality_too_short",
            WarningType::QualityTooLong => "quality_too_long",
            WarningType::QualityPlaceholder => "quality_placeholder",
        }
    }
}

/// Extra detail attached to a warning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarningMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl WarningMeta {
    pub fn phrases(phrases: Vec<String>) -> Self {
        Self {
            phrases: Some(phrases),
            ..Self::default()
        }
    }
}

/// A single issue found in one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub variant_index: usize,
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    pub reason: String,
    pub severity: Severity,
    pub action: FixAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<WarningMeta>,
}

impl Warning {
    /// Create a warning with the type's default severity and action
    pub fn new(variant_index: usize, warning_type: WarningType, reason: impl Into<String>) -> Self {
        Self {
            variant_index,
            warning_type,
            reason: reason.into(),
            severity: warning_type.default_severity(),
            action: warning_type.default_action(),
            matched_phrase: None,
            meta: None,
        }
    }

    pub fn with_matched_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.matched_phrase = Some(phrase.into());
        self
    }

    pub fn with_meta(mut self, meta: WarningMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Aggregated outcome of validating a set of variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub warnings: Vec<Warning>,
    pub summary: Option<String>,
}

impl ValidationResult {
    /// Build the result from collected warnings; `valid` and `summary` are derived
    pub fn from_warnings(warnings: Vec<Warning>) -> Self {
        let errors = warnings.iter().filter(|w| w.is_error()).count();
        let advisories = warnings.len() - errors;

        let summary = if warnings.is_empty() {
            None
        } else {
            let mut parts = Vec::new();
            if errors > 0 {
                parts.push(pluralize(errors, "error"));
            }
            if advisories > 0 {
                parts.push(pluralize(advisories, "warning"));
            }
            Some(parts.join(", "))
        };

        Self {
            valid: errors == 0,
            warnings,
            summary,
        }
    }

    pub fn error_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.iter().filter(|w| !w.is_error()).count()
    }

    /// Warnings belonging to one variant, in check order
    pub fn for_variant(&self, index: usize) -> Vec<Warning> {
        self.warnings
            .iter()
            .filter(|w| w.variant_index == index)
            .cloned()
            .collect()
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Outcome of a deterministic text repair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairResult {
    pub text: String,
    pub success: bool,
    pub changes: Vec<String>,
}

/// The single fix pass a caller should run next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryFix {
    pub action: FixAction,
    pub warnings: Vec<Warning>,
}

/// Which output convention the parser recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMethod {
    Json,
    Numbered,
    Bullets,
    Paragraphs,
    Fallback,
}

impl ParseMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMethod::Json => "json",
            ParseMethod::Numbered => "numbered",
            ParseMethod::Bullets => "bullets",
            ParseMethod::Paragraphs => "paragraphs",
            ParseMethod::Fallback => "fallback",
        }
    }
}

/// Variants recovered from one raw generator output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVariants {
    pub variants: Vec<String>,
    pub parse_method: ParseMethod,
}
