//! Copyguard Constraint - Validation and repair of generated copy
//!
//! This crate runs an ordered battery of lexical checks over generated
//! variants, grounding them against a context snapshot, and repairs the
//! cheapest class of problems (banned phrases) without another generator call.

mod checks;
mod compiled;
mod corpus;
pub mod patterns;
mod repair;
mod validator;

pub use corpus::ContextCorpus;
pub use repair::{
    collect_phrases_to_remove, get_primary_fix_action, remove_phrases_from_text, repair_variant,
};
pub use validator::{validate_generated_variants, ConstraintValidator, ValidatorOptions};
