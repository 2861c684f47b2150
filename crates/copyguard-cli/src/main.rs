//! Copyguard CLI - Parse, validate and repair generated marketing copy

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{check, parse, repair, validate, OutputFormat};
use config::CopyguardConfig;
use copyguard_constraint::ValidatorOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copyguard")]
#[command(about = "Validate and repair generated marketing copy", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to use instead of the global/project layers
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split raw generator output into variants
    Parse {
        /// Path to the raw output, or - for stdin
        input: String,

        /// Keep at most this many variants (0 keeps all)
        #[arg(long)]
        expected: Option<usize>,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Validate variants against a contract and context
    Validate {
        /// Variants file: JSON array, or one variant per line (- for stdin)
        variants: String,

        /// Path to the generation contract (.toml or .json)
        #[arg(long)]
        contract: String,

        /// Path to the context snapshot (.toml or .json)
        #[arg(long)]
        context: Option<String>,

        #[command(flatten)]
        flags: ValidatorFlags,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Remove phrases from a piece of copy
    Repair {
        /// Text to repair
        text: String,

        /// Phrase to remove (repeatable, applied in order)
        #[arg(long = "phrase", required = true)]
        phrases: Vec<String>,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Parse, validate and pick a fix for each variant
    Check {
        /// Path to the raw output, or - for stdin
        input: String,

        /// Path to the generation contract (.toml or .json)
        #[arg(long)]
        contract: String,

        /// Path to the context snapshot (.toml or .json)
        #[arg(long)]
        context: Option<String>,

        /// Keep at most this many variants (0 keeps all)
        #[arg(long)]
        expected: Option<usize>,

        /// Apply phrase-removal fixes and revalidate
        #[arg(long)]
        fix: bool,

        /// Preview fixes without applying
        #[arg(long)]
        dry_run: bool,

        /// Write the fixed variants here as a JSON array (with --fix)
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        flags: ValidatorFlags,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(clap::Args)]
struct ValidatorFlags {
    /// The business has not been defined yet
    #[arg(long)]
    business_definition_missing: bool,

    /// A gap business summary is available
    #[arg(long)]
    has_gap_summary: bool,
}

impl From<ValidatorFlags> for ValidatorOptions {
    fn from(flags: ValidatorFlags) -> Self {
        ValidatorOptions {
            business_definition_missing: flags.business_definition_missing,
            has_gap_business_summary: flags.has_gap_summary,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("COPYGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CopyguardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CopyguardConfig::load().context("Failed to load config")?,
    };

    match cli.command {
        Commands::Parse {
            input,
            expected,
            format,
        } => parse::run(parse::ParseArgs {
            input,
            expected: expected.unwrap_or(config.parser.expected_count),
            format: OutputFormat::resolve(format.as_deref(), &config)?,
        }),
        Commands::Validate {
            variants,
            contract,
            context,
            flags,
            format,
        } => validate::run(
            validate::ValidateArgs {
                variants,
                contract,
                context,
                options: flags.into(),
                format: OutputFormat::resolve(format.as_deref(), &config)?,
            },
            &config,
        ),
        Commands::Repair {
            text,
            phrases,
            format,
        } => repair::run(repair::RepairArgs {
            text,
            phrases,
            format: OutputFormat::resolve(format.as_deref(), &config)?,
        }),
        Commands::Check {
            input,
            contract,
            context,
            expected,
            fix,
            dry_run,
            output,
            flags,
            format,
        } => check::run(
            check::CheckArgs {
                input,
                contract,
                context,
                expected: expected.unwrap_or(config.parser.expected_count),
                fix,
                dry_run,
                output,
                options: flags.into(),
                format: OutputFormat::resolve(format.as_deref(), &config)?,
            },
            &config,
        ),
    }
}
