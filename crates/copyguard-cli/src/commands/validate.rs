//! Variant validation command

use super::{format_warning, load_context, load_contract, print_json, read_input, split_variants, OutputFormat};
use crate::config::CopyguardConfig;
use anyhow::Result;
use copyguard_constraint::{validate_generated_variants, ValidatorOptions};
use copyguard_core::ValidationResult;

pub struct ValidateArgs {
    pub variants: String,
    pub contract: String,
    pub context: Option<String>,
    pub options: ValidatorOptions,
    pub format: OutputFormat,
}

pub fn run(args: ValidateArgs, config: &CopyguardConfig) -> Result<()> {
    let variants = split_variants(&read_input(&args.variants)?);
    let contract = load_contract(&args.contract, config)?;
    let context = load_context(args.context.as_deref())?;

    let result = validate_generated_variants(&variants, &contract, &context, &args.options);

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_result_text(&result, &variants),
    }

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn print_result_text(result: &ValidationResult, variants: &[String]) {
    if result.warnings.is_empty() {
        println!("All {} variant(s) passed.", variants.len());
        return;
    }

    if let Some(summary) = &result.summary {
        println!("{}", summary);
    }

    for (index, variant) in variants.iter().enumerate() {
        let warnings = result.for_variant(index);
        if warnings.is_empty() {
            continue;
        }
        println!();
        println!("Variant {}: {}", index + 1, variant);
        for warning in &warnings {
            println!("  {}", format_warning(warning));
        }
    }
}
