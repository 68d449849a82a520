//! Common types used throughout derek
//!
//! This module contains shared type definitions, type aliases,
//! and the enumerations that parameterize inference and output.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Strategy
// ============================================================================

/// How sibling values are combined when inferring a schema
///
/// The strategy is threaded unchanged through every recursive step,
/// so nested containers are inferred the same way as the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Key names are free; every value matches one of the seen value schemas
    #[default]
    Permissive,
    /// Key names are exact; sibling objects are never merged
    Restricted,
    /// Sibling objects in a list are merged; keys seen everywhere are required
    InnerJoin,
}

impl Strategy {
    /// All recognized strategies, in declaration order
    pub const ALL: [Strategy; 3] = [Strategy::Permissive, Strategy::Restricted, Strategy::InnerJoin];

    /// Canonical name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Permissive => "permissive",
            Strategy::Restricted => "restricted",
            Strategy::InnerJoin => "inner_join",
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "permissive" => Ok(Strategy::Permissive),
            "restricted" => Ok(Strategy::Restricted),
            "inner_join" => Ok(Strategy::InnerJoin),
            other => Err(Error::unsupported_strategy(other)),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.as_str().to_string()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Schema Format
// ============================================================================

/// Output dialect of a schema document
///
/// Both dialects share the emitted keyword subset, so OAS3 output is
/// identical to OAS2 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SchemaFormat {
    Oas2,
    #[default]
    Oas3,
}

impl SchemaFormat {
    /// Canonical name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFormat::Oas2 => "oas2",
            SchemaFormat::Oas3 => "oas3",
        }
    }
}

impl FromStr for SchemaFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oas2" => Ok(SchemaFormat::Oas2),
            "oas3" => Ok(SchemaFormat::Oas3),
            _ => Err(Error::unsupported_format(s)),
        }
    }
}

impl TryFrom<String> for SchemaFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SchemaFormat> for String {
    fn from(format: SchemaFormat) -> Self {
        format.as_str().to_string()
    }
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
