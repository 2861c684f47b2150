//! Constraint validation over a set of variants

use crate::checks::{CheckContext, CHECKS};
use crate::corpus::ContextCorpus;
use copyguard_core::{ContextSnapshot, GenerationContract, ValidationResult, Warning};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Request-level flags that switch conditional checks on or off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// The business has not been defined yet, so generic engagement talk is drift
    #[serde(default)]
    pub business_definition_missing: bool,
    /// A gap summary stands in for the missing definition
    #[serde(default)]
    pub has_gap_business_summary: bool,
}

/// Validates variants against one contract and context snapshot
pub struct ConstraintValidator<'a> {
    contract: &'a GenerationContract,
    snapshot: &'a ContextSnapshot,
    corpus: ContextCorpus,
    options: ValidatorOptions,
}

impl<'a> ConstraintValidator<'a> {
    /// Create a new validator; the context corpus is built once here
    pub fn new(
        contract: &'a GenerationContract,
        snapshot: &'a ContextSnapshot,
        options: ValidatorOptions,
    ) -> Self {
        Self {
            contract,
            snapshot,
            corpus: ContextCorpus::from_snapshot(snapshot),
            options,
        }
    }

    /// Run every check over every variant and aggregate the warnings
    pub fn validate<S: AsRef<str>>(&self, variants: &[S]) -> ValidationResult {
        let warnings = variants
            .iter()
            .enumerate()
            .flat_map(|(index, variant)| self.validate_variant(index, variant.as_ref()))
            .collect();

        let result = ValidationResult::from_warnings(warnings);
        debug!(
            variants = variants.len(),
            errors = result.error_count(),
            warnings = result.warning_count(),
            valid = result.valid,
            "validated variants"
        );
        result
    }

    /// Warnings for a single variant, in check order
    pub fn validate_variant(&self, index: usize, text: &str) -> Vec<Warning> {
        let ctx = CheckContext {
            contract: self.contract,
            snapshot: self.snapshot,
            corpus: &self.corpus,
            options: &self.options,
        };

        let mut warnings = Vec::new();
        for (name, check) in CHECKS {
            let found = check(index, text, &ctx);
            if found.is_empty() {
                trace!(check = *name, variant = index, "check passed");
            } else {
                debug!(check = *name, variant = index, count = found.len(), "check flagged variant");
            }
            warnings.extend(found);
        }
        warnings
    }
}

/// Validate `variants` against `contract`, grounding them in `context`
pub fn validate_generated_variants<S: AsRef<str>>(
    variants: &[S],
    contract: &GenerationContract,
    context: &ContextSnapshot,
    options: &ValidatorOptions,
) -> ValidationResult {
    ConstraintValidator::new(contract, context, *options).validate(variants)
}
