//! Copyguard Core - Shared types for the Copyguard pipeline
//!
//! This crate provides the types every other Copyguard crate depends on:
//! - `GenerationContract`, `ContextSnapshot` - per-request inputs
//! - `Warning`, `ValidationResult` - validator output
//! - `RepairResult`, `PrimaryFix` - repair engine output
//! - `ParsedVariants` - parser output
//! - Error types and Result alias

mod contract;
mod context;
mod error;
mod types;

pub use contract::{GenerationContract, OutputSpec};
pub use context::{ContextSnapshot, FieldValue, NamedValue};
pub use error::{CopyguardError, Result};
pub use types::{
    FixAction, ParseMethod, ParsedVariants, PrimaryFix, RepairResult, Severity,
    ValidationResult, Warning, WarningMeta, WarningType,
};
