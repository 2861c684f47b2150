//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `COPYGUARD_EXPECTED_COUNT`, `COPYGUARD_MAX_WORDS`, `COPYGUARD_FORMAT`
//! 2. Project-local: `.copyguard/config.toml`
//! 3. Global: `~/.copyguard/config.toml`

use copyguard_core::{CopyguardError, GenerationContract, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_EXPECTED_COUNT: &str = "COPYGUARD_EXPECTED_COUNT";
pub const ENV_MAX_WORDS: &str = "COPYGUARD_MAX_WORDS";
pub const ENV_FORMAT: &str = "COPYGUARD_FORMAT";

/// Parser defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_expected_count")]
    pub expected_count: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            expected_count: default_expected_count(),
        }
    }
}

fn default_expected_count() -> usize {
    3
}

/// Defaults applied on top of every loaded contract
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Used when the contract leaves `maxWords` at 0
    #[serde(default)]
    pub default_max_words: u32,
    #[serde(default)]
    pub extra_exclusions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyguardConfigFile {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default)]
pub struct CopyguardConfig {
    pub parser: ParserConfig,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

impl CopyguardConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = CopyguardConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".copyguard/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_env_overrides(&mut config)?;
        Ok(config.into())
    }

    /// Load config from a specific file path only
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config)?;
        Ok(config.into())
    }

    /// Fill in the configured word limit and append the configured exclusions
    pub fn apply_to_contract(&self, contract: &mut GenerationContract) {
        if contract.output_spec.max_words == 0 {
            contract.output_spec.max_words = self.validation.default_max_words;
        }
        for phrase in &self.validation.extra_exclusions {
            let exists = contract
                .exclusions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(phrase));
            if !exists {
                contract.exclusions.push(phrase.clone());
            }
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".copyguard").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<CopyguardConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: CopyguardConfigFile = toml::from_str(&content).map_err(|e| {
            CopyguardError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut CopyguardConfigFile, overlay: CopyguardConfigFile) {
        if overlay.parser.expected_count != default_expected_count() {
            base.parser.expected_count = overlay.parser.expected_count;
        }
        if overlay.validation.default_max_words != 0 {
            base.validation.default_max_words = overlay.validation.default_max_words;
        }
        for phrase in overlay.validation.extra_exclusions {
            if !base.validation.extra_exclusions.contains(&phrase) {
                base.validation.extra_exclusions.push(phrase);
            }
        }
        if overlay.output.format != default_format() {
            base.output.format = overlay.output.format;
        }
    }

    fn apply_env_overrides(config: &mut CopyguardConfigFile) -> Result<()> {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    fn apply_overrides(
        config: &mut CopyguardConfigFile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(value) = lookup(ENV_EXPECTED_COUNT) {
            config.parser.expected_count = parse_env(ENV_EXPECTED_COUNT, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_WORDS) {
            config.validation.default_max_words = parse_env(ENV_MAX_WORDS, &value)?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            config.output.format = value.trim().to_lowercase();
        }
        Ok(())
    }
}

impl From<CopyguardConfigFile> for CopyguardConfig {
    fn from(file: CopyguardConfigFile) -> Self {
        Self {
            parser: file.parser,
            validation: file.validation,
            output: file.output,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CopyguardError::ConfigError(format!("{} must be a whole number, got '{}'", key, value)))
}
