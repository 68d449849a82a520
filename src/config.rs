//! Inference configuration
//!
//! Settings for schema document generation, loadable from a YAML or
//! JSON file. Command-line flags override values read from the file.
//!
//! ```yaml
//! strategy: inner_join
//! format: oas3
//! name: users
//! example: true
//! ```

use crate::error::{Error, Result};
use crate::types::{SchemaFormat, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for inference and document output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Merge strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Output dialect
    #[serde(default)]
    pub format: SchemaFormat,

    /// Document name (defaults to the tree's name, then "untitled")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attach a generated example to the document
    #[serde(default = "default_true")]
    pub example: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            format: SchemaFormat::default(),
            name: None,
            example: true,
        }
    }
}

impl InferenceConfig {
    /// Parse a config from YAML (JSON is accepted too)
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Set the strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the document name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable/disable the generated example
    #[must_use]
    pub fn with_example(mut self, enabled: bool) -> Self {
        self.example = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InferenceConfig::default();
        assert_eq!(config.strategy, Strategy::Permissive);
        assert_eq!(config.format, SchemaFormat::Oas3);
        assert_eq!(config.name, None);
        assert!(config.example);

        assert_eq!(InferenceConfig::from_yaml("").unwrap(), config);
        assert_eq!(InferenceConfig::from_yaml("{}").unwrap(), config);
    }

    #[test]
    fn test_parse_yaml() {
        let config = InferenceConfig::from_yaml(
            "strategy: inner_join\nformat: OAS2\nname: users\nexample: false\n",
        )
        .unwrap();

        assert_eq!(config.strategy, Strategy::InnerJoin);
        assert_eq!(config.format, SchemaFormat::Oas2);
        assert_eq!(config.name.as_deref(), Some("users"));
        assert!(!config.example);
    }

    #[test]
    fn test_parse_json() {
        let config = InferenceConfig::from_yaml(r#"{"strategy": "restricted"}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Restricted);
        assert!(config.example);
    }

    #[test]
    fn test_invalid_strategy() {
        let err = InferenceConfig::from_yaml("strategy: outer_join").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().contains("Unsupported strategy 'outer_join'"));
    }

    #[test]
    fn test_unknown_field() {
        assert!(InferenceConfig::from_yaml("strategi: restricted").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy: restricted\nname: orders").unwrap();

        let config = InferenceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Restricted);
        assert_eq!(config.name.as_deref(), Some("orders"));
    }

    #[test]
    fn test_missing_file() {
        let err = InferenceConfig::from_file("/no/such/derek.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_builders() {
        let config = InferenceConfig::default()
            .with_strategy(Strategy::InnerJoin)
            .with_format(SchemaFormat::Oas2)
            .with_name("doc")
            .with_example(false);

        assert_eq!(config.strategy, Strategy::InnerJoin);
        assert_eq!(config.format, SchemaFormat::Oas2);
        assert_eq!(config.name.as_deref(), Some("doc"));
        assert!(!config.example);
    }
}
