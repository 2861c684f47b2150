//! Copyguard Parser - Recover variants from raw generator output
//!
//! Generators answer in whatever shape they like: a JSON object, a numbered
//! list, bullets, or loose paragraphs. This crate tries each convention in
//! order and returns the first one that yields text.

mod cascade;
mod clean;
mod pattern;
mod strategies;

pub use cascade::parse_variants_from_output;
pub use clean::clean_variant_text;
