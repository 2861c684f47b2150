//! Generation contract definitions and file loading

use crate::error::{CopyguardError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output limits for one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Soft word limit; 0 disables the length check
    #[serde(default, alias = "max_words")]
    pub max_words: u32,
}

/// Caller-supplied policy for one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContract {
    /// Banned phrases, matched case-insensitively as substrings
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default, alias = "output_spec")]
    pub output_spec: OutputSpec,
}

impl GenerationContract {
    pub fn new(exclusions: Vec<String>, max_words: u32) -> Self {
        Self {
            exclusions,
            output_spec: OutputSpec { max_words },
        }
    }

    pub fn max_words(&self) -> u32 {
        self.output_spec.max_words
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a contract from a `.toml` or `.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_structured(path.as_ref())
    }
}

/// Read a TOML or JSON file, picking the format from the extension
pub(crate) fn load_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(CopyguardError::UnsupportedFormat(format!(
            "{} (expected .toml or .json)",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("copyguard_contract_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_parse_contract_from_json() {
        let contract = GenerationContract::from_json_str(
            r#"{"exclusions": ["synergy", "Best-in-class"], "outputSpec": {"maxWords": 25}}"#,
        )
        .unwrap();
        assert_eq!(contract.exclusions, vec!["synergy", "Best-in-class"]);
        assert_eq!(contract.max_words(), 25);
    }

    #[test]
    fn test_parse_contract_from_toml_snake_case() {
        let toml_str = r#"
exclusions = ["cheap"]

[output_spec]
max_words = 40
"#;
        let contract = GenerationContract::from_toml_str(toml_str).unwrap();
        assert_eq!(contract.exclusions, vec!["cheap"]);
        assert_eq!(contract.max_words(), 40);
    }

    #[test]
    fn test_missing_fields_default() {
        let contract = GenerationContract::from_json_str("{}").unwrap();
        assert!(contract.exclusions.is_empty());
        assert_eq!(contract.max_words(), 0);
    }

    #[test]
    fn test_load_by_extension() {
        let path = temp_file("contract.json", r#"{"exclusions": ["x"]}"#);
        let contract = GenerationContract::load(&path).unwrap();
        assert_eq!(contract.exclusions, vec!["x"]);
        cleanup(&path);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_file("contract.yaml", "exclusions: []");
        let err = GenerationContract::load(&path).unwrap_err();
        assert!(matches!(err, CopyguardError::UnsupportedFormat(_)));
        cleanup(&path);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = GenerationContract::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CopyguardError::JsonParseError(_)));
    }
}
