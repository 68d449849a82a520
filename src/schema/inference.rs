//! Schema inference over a value tree

use super::merge::{merge_schemas, one_of};
use super::types::Schema;
use crate::error::{Error, Result};
use crate::tree::{value_kind, NodeRef, Tree};
use crate::types::Strategy;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Schema inferrer for a single merge strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaInferrer {
    strategy: Strategy,
}

impl SchemaInferrer {
    /// Create an inferrer for the given strategy
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Create an inferrer from a strategy name
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Strategy used by this inferrer
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Infer the schema of a whole tree
    pub fn infer_tree(&self, tree: &Tree<'_>) -> Result<Schema> {
        tracing::debug!(
            strategy = %self.strategy,
            nodes = tree.len(),
            "inferring schema"
        );
        self.infer(tree.root())
    }

    /// Infer the schema of the subtree rooted at `node`
    pub fn infer(&self, node: NodeRef<'_, '_>) -> Result<Schema> {
        // Booleans are a separate variant, so they never read as integers
        match node.value() {
            Value::Array(items) if items.is_empty() => Ok(Schema::empty_array()),
            Value::Object(map) if map.is_empty() => Ok(Schema::object(IndexMap::new())),
            Value::String(_) => Ok(Schema::String),
            Value::Number(n) if n.is_f64() => Ok(Schema::Number),
            Value::Bool(_) => Ok(Schema::Boolean),
            Value::Number(_) => Ok(Schema::Integer),
            Value::Array(_) => self.infer_list(node),
            Value::Object(map) => self.infer_object(node, map),
            other => Err(Error::unsupported_value(value_kind(other), node.pointer())),
        }
    }

    fn infer_list(&self, node: NodeRef<'_, '_>) -> Result<Schema> {
        let subschemas = self.child_schemas(node)?;

        let items = match self.strategy {
            Strategy::Permissive | Strategy::Restricted => one_of(subschemas),
            Strategy::InnerJoin => one_of(merge_schemas(subschemas)),
        };

        Ok(Schema::array(items))
    }

    fn infer_object(&self, node: NodeRef<'_, '_>, map: &Map<String, Value>) -> Result<Schema> {
        let subschemas = self.child_schemas(node)?;

        match self.strategy {
            Strategy::Permissive => Ok(Schema::open_object(one_of(subschemas))),
            // Merging only happens between siblings, one level up
            Strategy::Restricted | Strategy::InnerJoin => {
                let properties = map.keys().cloned().zip(subschemas).collect();
                Ok(Schema::object(properties))
            }
        }
    }

    fn child_schemas(&self, node: NodeRef<'_, '_>) -> Result<Vec<Schema>> {
        node.children().map(|child| self.infer(child)).collect()
    }
}

/// Infer the schema of a tree (convenience function)
pub fn infer(tree: &Tree<'_>, strategy: Strategy) -> Result<Schema> {
    SchemaInferrer::new(strategy).infer_tree(tree)
}

/// Build a tree from `value` and infer its schema
pub fn infer_value(value: &Value, strategy: Strategy) -> Result<Schema> {
    infer(&Tree::new(value), strategy)
}
