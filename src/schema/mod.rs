//! Schema inference module
//!
//! Turns a value tree into an OpenAPI Schema Object.
//!
//! # Strategies
//!
//! - **permissive**: objects become `additionalProperties` over the union of
//!   their value schemas; key names are discarded
//! - **restricted**: objects keep their exact `properties`; siblings are
//!   never merged
//! - **inner_join**: sibling objects in a list merge into one object whose
//!   `required` keys are those present in every sibling
//!
//! Duplicate schemas are removed structurally, in first-seen order, and a
//! single remaining candidate is never wrapped in `oneOf`.

mod inference;
mod merge;
mod types;

pub use inference::{infer, infer_value, SchemaInferrer};
pub use merge::{merge_objects, merge_schemas, one_of, unique_schemas};
pub use types::{ObjectSchema, Schema, SchemaType};
