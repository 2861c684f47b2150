//! Variant parsing command

use super::{print_json, read_input, OutputFormat};
use anyhow::Result;
use copyguard_core::ParsedVariants;
use copyguard_parser::parse_variants_from_output;

pub struct ParseArgs {
    pub input: String,
    pub expected: usize,
    pub format: OutputFormat,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let parsed = parse_variants_from_output(&raw, args.expected);

    match args.format {
        OutputFormat::Json => print_json(&parsed)?,
        OutputFormat::Text => print_parsed_text(&parsed),
    }
    Ok(())
}

fn print_parsed_text(parsed: &ParsedVariants) {
    if parsed.variants.is_empty() {
        println!("No variants found.");
        return;
    }

    println!(
        "{} variant(s) ({})",
        parsed.variants.len(),
        parsed.parse_method.as_str()
    );
    for (i, variant) in parsed.variants.iter().enumerate() {
        println!("  {}. {}", i + 1, variant);
    }
}
