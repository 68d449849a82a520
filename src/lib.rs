//! # derek
//!
//! Infer an OpenAPI Schema Object (OAS2/OAS3 compatible) from an example
//! of nested JSON-like data, and regenerate a minimal example matching it.
//!
//! ## Quick Start
//!
//! ```rust
//! use derek::{Schema, SchemaInferrer, Strategy, Tree};
//! use serde_json::json;
//!
//! let value = json!([{"a": 1, "b": "b1"}, {"a": 4}]);
//! let tree = Tree::new(&value);
//!
//! let schema = SchemaInferrer::new(Strategy::InnerJoin).infer_tree(&tree)?;
//! assert_eq!(
//!     schema.to_json(),
//!     json!({
//!         "type": "array",
//!         "items": {
//!             "type": "object",
//!             "properties": {"a": {"type": "integer"}, "b": {"type": "string"}},
//!             "required": ["a"]
//!         }
//!     })
//! );
//! assert_eq!(tree.example(), json!([{"a": 1, "b": "b1"}]));
//! # Ok::<(), derek::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   value ──► Tree Builder ──► Tree ──► Schema Inference(strategy) ──► Schema
//!                               │
//!                               └─────► Example Generator ──► value
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for derek
pub mod error;

/// Common types and type aliases
pub mod types;

/// Value trees
pub mod tree;

/// Schema inference from value trees
pub mod schema;

/// Example generation from value trees
pub mod example;

/// Named schema documents
pub mod document;

/// Inference configuration
pub mod config;

/// JSON/YAML input loading
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::InferenceConfig;
pub use document::{DocumentBuilder, DEFAULT_DOCUMENT_NAME};
pub use error::{Error, Result};
pub use example::example;
pub use schema::{infer, infer_value, ObjectSchema, Schema, SchemaInferrer, SchemaType};
pub use tree::{NodeId, NodeRef, Tree, TreeBuilder};
pub use types::{SchemaFormat, Strategy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
