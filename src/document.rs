//! Schema documents
//!
//! Wraps an inferred schema under a document name, optionally with a
//! generated example attached:
//!
//! ```json
//! { "users": { "type": "array", "items": { ... }, "example": [ ... ] } }
//! ```

use crate::config::InferenceConfig;
use crate::error::Result;
use crate::schema::SchemaInferrer;
use crate::tree::Tree;
use crate::types::{SchemaFormat, Strategy};
use serde_json::{Map, Value};

/// Name used when neither the builder nor the tree provides one
pub const DEFAULT_DOCUMENT_NAME: &str = "untitled";

/// Builds named schema documents from trees
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    format: SchemaFormat,
    strategy: Strategy,
    name: Option<String>,
    include_example: bool,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::from_config(&InferenceConfig::default())
    }

    /// Create a builder from an inference config
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self {
            format: config.format,
            strategy: config.strategy,
            name: config.name.clone(),
            include_example: config.example,
        }
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the merge strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Override the document name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable/disable the generated example
    #[must_use]
    pub fn with_example(mut self, enabled: bool) -> Self {
        self.include_example = enabled;
        self
    }

    /// Resolve the document name for a tree
    pub fn document_name<'t>(&'t self, tree: &'t Tree<'_>) -> &'t str {
        self.name
            .as_deref()
            .or_else(|| tree.root().name())
            .unwrap_or(DEFAULT_DOCUMENT_NAME)
    }

    /// Build the document for a tree
    pub fn build(&self, tree: &Tree<'_>) -> Result<Value> {
        let schema = match self.format {
            // OAS3 shares the OAS2 keyword subset
            SchemaFormat::Oas2 | SchemaFormat::Oas3 => {
                SchemaInferrer::new(self.strategy).infer_tree(tree)?
            }
        };

        let mut body = match schema.to_json() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if self.include_example {
            body.insert("example".to_string(), tree.example());
        }

        let name = self.document_name(tree);
        tracing::debug!(name, format = %self.format, "built schema document");

        let mut document = Map::new();
        document.insert(name.to_string(), Value::Object(body));
        Ok(Value::Object(document))
    }
}
