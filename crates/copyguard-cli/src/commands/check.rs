//! Parse, validate and repair in one pass

use super::{format_warning, load_context, load_contract, print_json, read_input, OutputFormat};
use crate::config::CopyguardConfig;
use anyhow::{Context, Result};
use copyguard_constraint::{get_primary_fix_action, repair_variant, ConstraintValidator, ValidatorOptions};
use copyguard_core::{ParseMethod, PrimaryFix, RepairResult, ValidationResult, Warning};
use copyguard_parser::parse_variants_from_output;
use serde::Serialize;

pub struct CheckArgs {
    pub input: String,
    pub contract: String,
    pub context: Option<String>,
    pub expected: usize,
    pub fix: bool,
    pub dry_run: bool,
    pub output: Option<String>,
    pub options: ValidatorOptions,
    pub format: OutputFormat,
}

/// Whether deterministic repairs are skipped, previewed, or kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    Off,
    DryRun,
    Apply,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantReport {
    pub index: usize,
    pub text: String,
    pub warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_fix: Option<PrimaryFix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair: Option<RepairResult>,
    /// Warnings left after the repair was revalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Vec<Warning>>,
}

impl VariantReport {
    /// The text this variant ends up with under `mode`
    pub fn final_text(&self, mode: FixMode) -> &str {
        match (&self.repair, mode) {
            (Some(repair), FixMode::Apply) => &repair.text,
            _ => &self.text,
        }
    }

    fn final_warnings(&self, mode: FixMode) -> &[Warning] {
        match (&self.remaining, mode) {
            (Some(remaining), FixMode::Apply) => remaining,
            _ => &self.warnings,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub parse_method: ParseMethod,
    pub variants: Vec<VariantReport>,
    /// Outcome for the variants as they stand after this run
    pub result: ValidationResult,
}

pub fn run(args: CheckArgs, config: &CopyguardConfig) -> Result<()> {
    let raw = read_input(&args.input)?;
    let contract = load_contract(&args.contract, config)?;
    let context = load_context(args.context.as_deref())?;

    let mode = if args.fix {
        FixMode::Apply
    } else if args.dry_run {
        FixMode::DryRun
    } else {
        FixMode::Off
    };

    let parsed = parse_variants_from_output(&raw, args.expected);
    let validator = ConstraintValidator::new(&contract, &context, args.options);
    let report = check_variants(&validator, parsed.parse_method, &parsed.variants, mode);

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report_text(&report, mode),
    }

    if mode == FixMode::Apply {
        if let Some(output) = &args.output {
            let fixed: Vec<&str> = report.variants.iter().map(|v| v.final_text(mode)).collect();
            let json = serde_json::to_string_pretty(&fixed)?;
            std::fs::write(output, json).with_context(|| format!("Failed to write {}", output))?;
            eprintln!("Variants saved to {}", output);
        }
    }

    if !report.result.valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Validate each variant, pick its primary fix and, unless `mode` is off, run the deterministic repair
pub fn check_variants(
    validator: &ConstraintValidator,
    parse_method: ParseMethod,
    variants: &[String],
    mode: FixMode,
) -> CheckReport {
    let reports: Vec<VariantReport> = variants
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let warnings = validator.validate_variant(index, text);
            let primary_fix = get_primary_fix_action(&warnings);

            let repair = match mode {
                FixMode::Off => None,
                FixMode::DryRun | FixMode::Apply => {
                    repair_variant(text, &warnings).filter(|r| r.success)
                }
            };
            let remaining = repair
                .as_ref()
                .map(|r| validator.validate_variant(index, &r.text));

            VariantReport {
                index,
                text: text.clone(),
                warnings,
                primary_fix,
                repair,
                remaining,
            }
        })
        .collect();

    let final_warnings = reports
        .iter()
        .flat_map(|r| r.final_warnings(mode).iter().cloned())
        .collect();

    CheckReport {
        parse_method,
        variants: reports,
        result: ValidationResult::from_warnings(final_warnings),
    }
}

fn print_report_text(report: &CheckReport, mode: FixMode) {
    println!(
        "Parsed {} variant(s) ({})",
        report.variants.len(),
        report.parse_method.as_str()
    );
    match &report.result.summary {
        Some(summary) => println!("{}", summary),
        None => println!("All variants passed."),
    }

    for variant in &report.variants {
        println!();
        println!("Variant {}: {}", variant.index + 1, variant.text);
        for warning in &variant.warnings {
            println!("  {}", format_warning(warning));
        }

        if let Some(fix) = &variant.primary_fix {
            println!(
                "  Primary fix: {} ({} warning(s))",
                fix.action.as_str(),
                fix.warnings.len()
            );
        }

        if let Some(repair) = &variant.repair {
            let label = if mode == FixMode::Apply { "Repaired" } else { "Would repair" };
            println!("  {}: {}", label, repair.text);
            for change in &repair.changes {
                println!("    {}", change);
            }
            if let Some(remaining) = &variant.remaining {
                println!("  {} issue(s) remain after repair", remaining.len());
            }
        }
    }
}
