//! CLI command implementations

pub mod check;
pub mod parse;
pub mod repair;
pub mod validate;

use crate::config::CopyguardConfig;
use anyhow::{bail, Context, Result};
use copyguard_core::{ContextSnapshot, GenerationContract, Severity, Warning};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// How a command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// The `--format` flag wins over the configured default
    pub fn resolve(flag: Option<&str>, config: &CopyguardConfig) -> Result<Self> {
        let name = flag.unwrap_or(&config.output.format);
        match name.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown format: {} (expected text or json)", other),
        }
    }
}

/// Read a file, or stdin when `path` is `-`
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariantsDocument {
    List(Vec<String>),
    Parsed { variants: Vec<String> },
}

/// Variants from a JSON array (or `parse --format json` output), else one per non-blank line
pub fn split_variants(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<VariantsDocument>(trimmed) {
            Ok(VariantsDocument::List(variants)) | Ok(VariantsDocument::Parsed { variants }) => {
                return variants;
            }
            Err(e) => tracing::debug!(error = %e, "variants are not JSON, reading lines"),
        }
    }

    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a contract and layer the configured defaults onto it
pub fn load_contract(path: &str, config: &CopyguardConfig) -> Result<GenerationContract> {
    let mut contract = GenerationContract::load(path)
        .with_context(|| format!("Failed to load contract {}", path))?;
    config.apply_to_contract(&mut contract);
    Ok(contract)
}

/// Load a context snapshot; no path means an empty context
pub fn load_context(path: Option<&str>) -> Result<ContextSnapshot> {
    match path {
        Some(path) => {
            ContextSnapshot::load(path).with_context(|| format!("Failed to load context {}", path))
        }
        None => Ok(ContextSnapshot::new()),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_warning(warning: &Warning) -> String {
    let severity_str = match warning.severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARN ",
    };
    format!(
        "[{}] {}: {} [{}]",
        severity_str,
        warning.warning_type.as_str(),
        warning.reason,
        warning.action.as_str()
    )
}
