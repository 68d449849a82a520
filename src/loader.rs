//! Input loading
//!
//! Reads example payloads from JSON or YAML text. Files ending in
//! `.yaml` or `.yml` are read as YAML, everything else as JSON.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Text format of an example payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Parse an example payload from a string
pub fn load_value_from_str(content: &str, format: InputFormat) -> Result<Value> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Load an example payload from a file
pub fn load_value(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded input");
    load_value_from_str(&content, InputFormat::from_path(path))
}

/// Load an example payload from any reader (e.g. stdin)
pub fn load_value_from_reader(mut reader: impl Read, format: InputFormat) -> Result<Value> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    load_value_from_str(&content, format)
}
