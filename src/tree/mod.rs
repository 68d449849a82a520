//! Tree module
//!
//! Materializes an input value into a read-only tree of nodes that
//! mirrors its nested-container structure.
//!
//! # Layout
//!
//! - Nodes live in a flat arena and are addressed by [`NodeId`]
//! - Parents are stored as ids, used only for navigation
//! - Lists get one child per element, maps one child per value
//! - Scalars have no children (`None`), empty containers have `Some([])`

mod builder;
mod types;

pub use builder::TreeBuilder;
pub use types::{value_kind, Node, NodeId, NodeRef, Tree};

#[cfg(test)]
mod tests;
