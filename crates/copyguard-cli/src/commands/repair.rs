//! Phrase removal command

use super::{print_json, OutputFormat};
use anyhow::Result;
use copyguard_constraint::remove_phrases_from_text;

pub struct RepairArgs {
    pub text: String,
    pub phrases: Vec<String>,
    pub format: OutputFormat,
}

pub fn run(args: RepairArgs) -> Result<()> {
    let result = remove_phrases_from_text(&args.text, &args.phrases);

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            println!("{}", result.text);
            if result.success {
                for change in &result.changes {
                    eprintln!("  {}", change);
                }
            } else {
                eprintln!("  No phrases removed.");
            }
        }
    }
    Ok(())
}
