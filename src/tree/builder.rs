//! Tree construction

use super::types::{Node, NodeId, Tree};
use serde_json::Value;

/// Builds a [`Tree`] top-down from borrowed values
///
/// Construction walks an explicit work stack, so deeply nested input
/// cannot exhaust the call stack.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> TreeBuilder<'a> {
    /// Start a tree with `value` as its root
    pub fn new(value: &'a Value, name: Option<&str>) -> Self {
        let mut builder = Self { nodes: Vec::new() };
        builder.build(value, None, name);
        builder
    }

    /// Build the subtree for `value` and return its node id
    ///
    /// With a `parent`, the new node records it as a back-reference; the
    /// parent's own children are left untouched, since they always mirror
    /// the parent's value.
    pub fn build(&mut self, value: &'a Value, parent: Option<NodeId>, name: Option<&str>) -> NodeId {
        debug_assert!(parent.map_or(true, |p| p.0 < self.nodes.len()));

        let top = self.push(value, parent, name.map(str::to_string));
        let mut pending = vec![top];

        while let Some(id) = pending.pop() {
            let value = self.nodes[id.0].value;
            let children: Vec<NodeId> = match value {
                Value::Array(items) => items
                    .iter()
                    .map(|item| self.push(item, Some(id), None))
                    .collect(),
                Value::Object(map) => map
                    .values()
                    .map(|item| self.push(item, Some(id), None))
                    .collect(),
                // Not a container
                _ => continue,
            };

            pending.extend(children.iter().copied());
            self.nodes[id.0].children = Some(children);
        }

        top
    }

    /// Seal the arena into an immutable tree
    pub fn finish(self) -> Tree<'a> {
        Tree { nodes: self.nodes }
    }

    fn push(&mut self, value: &'a Value, parent: Option<NodeId>, name: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent,
            children: None,
            name,
        });
        id
    }
}
