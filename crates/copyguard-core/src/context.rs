//! Context snapshot: the confirmed business facts generated copy is grounded against

use crate::contract::load_structured;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// An entry of a `{name}` object list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
}

/// A single context field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Named(Vec<NamedValue>),
    /// Any other shape; ignored when building the grounding corpus
    Other(serde_json::Value),
}

impl FieldValue {
    /// String leaves of this value, blanks dropped
    pub fn string_leaves(&self) -> Vec<&str> {
        let leaves: Vec<&str> = match self {
            FieldValue::Text(s) => vec![s.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
            FieldValue::Named(items) => items.iter().map(|n| n.name.as_str()).collect(),
            FieldValue::Other(_) => Vec::new(),
        };
        leaves.into_iter().filter(|s| !s.trim().is_empty()).collect()
    }

    /// Render the value as one line of text; scalars in `Other` are rendered too
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Other(serde_json::Value::Number(n)) => Some(n.to_string()),
            FieldValue::Other(serde_json::Value::Bool(b)) => Some(b.to_string()),
            FieldValue::Other(_) => None,
            _ => {
                let leaves = self.string_leaves();
                if leaves.is_empty() {
                    None
                } else {
                    Some(leaves.join(", "))
                }
            }
        }
    }
}

/// Flat field-path -> value mapping of confirmed facts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ContextSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(path.into(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_list<S: Into<String>>(mut self, path: impl Into<String>, values: Vec<S>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.fields.insert(path.into(), FieldValue::List(values));
        self
    }

    pub fn with_names<S: Into<String>>(mut self, path: impl Into<String>, names: Vec<S>) -> Self {
        let names = names
            .into_iter()
            .map(|n| NamedValue { name: n.into() })
            .collect();
        self.fields.insert(path.into(), FieldValue::Named(names));
        self
    }

    /// Every string-bearing leaf across all fields
    pub fn context_values(&self) -> Vec<String> {
        self.fields
            .values()
            .flat_map(|v| v.string_leaves())
            .map(str::to_string)
            .collect()
    }

    /// Text rendering of one field, if present and string-like
    pub fn field_text(&self, path: &str) -> Option<String> {
        self.fields.get(path).and_then(FieldValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a snapshot from a `.toml` or `.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_structured(path.as_ref())
    }
}
