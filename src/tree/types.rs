//! Tree types

use super::builder::TreeBuilder;
use serde_json::Value;

/// Index of a node inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// One position in the tree
///
/// The value is borrowed from the input; map keys are not stored on the
/// child and can only be recovered through the parent's value.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub(crate) value: &'a Value,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Option<Vec<NodeId>>,
    pub(crate) name: Option<String>,
}

/// Immutable arena of nodes mirroring the nesting of an input value
#[derive(Debug, Clone)]
pub struct Tree<'a> {
    pub(crate) nodes: Vec<Node<'a>>,
}

impl<'a> Tree<'a> {
    /// Build a tree from a value
    pub fn new(value: &'a Value) -> Self {
        TreeBuilder::new(value, None).finish()
    }

    /// Build a tree whose root carries a document name
    pub fn named(value: &'a Value, name: &str) -> Self {
        TreeBuilder::new(value, Some(name)).finish()
    }

    /// Root node (the first node built)
    pub fn root(&self) -> NodeRef<'_, 'a> {
        NodeRef {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, 'a>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in arena order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_, 'a>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef {
            tree: self,
            id: NodeId(i),
        })
    }

    /// JSON-pointer fragment locating a node, e.g. `#/users/0/name`
    pub fn pointer(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = self.get(id);

        while let Some(node) = current {
            match node.segment() {
                Some(segment) => segments.push(segment),
                None => break,
            }
            current = node.parent();
        }

        let mut pointer = String::from("#");
        for segment in segments.iter().rev() {
            pointer.push('/');
            pointer.push_str(&escape_pointer_segment(segment));
        }
        pointer
    }
}

/// Borrowed view of a single node
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t, 'a> {
    tree: &'t Tree<'a>,
    id: NodeId,
}

impl<'t, 'a> NodeRef<'t, 'a> {
    fn node(self) -> &'t Node<'a> {
        &self.tree.nodes[self.id.0]
    }

    /// Id of this node
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Tree this node belongs to
    pub fn tree(self) -> &'t Tree<'a> {
        self.tree
    }

    /// The input value at this position
    pub fn value(self) -> &'a Value {
        self.node().value
    }

    /// Document name (only set on roots)
    pub fn name(self) -> Option<&'t str> {
        self.node().name.as_deref()
    }

    /// Enclosing node, if any
    pub fn parent(self) -> Option<NodeRef<'t, 'a>> {
        self.node().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Child ids; `None` for scalars
    pub fn child_ids(self) -> Option<&'t [NodeId]> {
        self.node().children.as_deref()
    }

    /// Children in sequence order (lists) or key order (maps)
    pub fn children(self) -> impl Iterator<Item = NodeRef<'t, 'a>> + 't {
        let tree = self.tree;
        self.child_ids()
            .unwrap_or(&[])
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// First child, if any
    pub fn first_child(self) -> Option<NodeRef<'t, 'a>> {
        self.children().next()
    }

    /// Whether this node wraps a scalar
    pub fn is_leaf(self) -> bool {
        self.node().children.is_none()
    }

    /// Whether this node has no parent
    pub fn is_root(self) -> bool {
        self.node().parent.is_none()
    }

    /// Number of ancestors
    pub fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    /// JSON-pointer fragment locating this node
    pub fn pointer(self) -> String {
        self.tree.pointer(self.id)
    }

    /// Key or index under which the parent holds this node
    fn segment(self) -> Option<String> {
        let parent = self.parent()?;
        let position = parent.child_ids()?.iter().position(|&id| id == self.id)?;

        match parent.value() {
            Value::Array(_) => Some(position.to_string()),
            Value::Object(map) => map.keys().nth(position).cloned(),
            _ => None,
        }
    }
}

/// Short name of a value's variant, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn escape_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
