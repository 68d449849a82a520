//! Example generation
//!
//! Projects a tree back onto a minimal value with the same skeleton:
//! lists keep only their first element, maps keep every key.

use crate::tree::{NodeRef, Tree};
use serde_json::{Map, Value};

/// Generate an example value for the subtree rooted at `node`
pub fn example(node: NodeRef<'_, '_>) -> Value {
    match node.value() {
        Value::Array(_) => Value::Array(node.first_child().map(example).into_iter().collect()),
        Value::Object(map) => {
            let values = node.children().map(example);
            Value::Object(map.keys().cloned().zip(values).collect::<Map<_, _>>())
        }
        scalar => scalar.clone(),
    }
}

impl Tree<'_> {
    /// Generate an example value for the whole tree
    pub fn example(&self) -> Value {
        example(self.root())
    }
}
