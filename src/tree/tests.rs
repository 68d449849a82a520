//! Tree builder tests

use super::*;
use serde_json::json;

#[test]
fn test_scalar_tree() {
    let value = json!(3141);
    let tree = Tree::new(&value);

    assert_eq!(tree.len(), 1);
    let root = tree.root();
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert!(root.child_ids().is_none());
    assert!(root.name().is_none());
    assert!(std::ptr::eq(root.value(), &value));
}

#[test]
fn test_named_root() {
    let value = json!({"a": 1});
    let tree = Tree::named(&value, "some_node_name");

    assert_eq!(tree.root().name(), Some("some_node_name"));
    // Only the root carries a name
    assert!(tree.root().first_child().unwrap().name().is_none());
}

#[test]
fn test_list_children_follow_sequence_order() {
    let value = json!([10, "x", 2.5]);
    let tree = Tree::new(&value);
    let root = tree.root();

    let children: Vec<_> = root.children().map(|c| c.value().clone()).collect();
    assert_eq!(children, vec![json!(10), json!("x"), json!(2.5)]);

    for child in root.children() {
        assert_eq!(child.parent().unwrap().id(), root.id());
        assert!(child.is_leaf());
    }
}

#[test]
fn test_map_children_follow_key_order() {
    let value = json!({"z": 1, "a": 2, "m": 3});
    let tree = Tree::new(&value);

    let children: Vec<_> = tree.root().children().map(|c| c.value().clone()).collect();
    assert_eq!(children, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn test_map_children_count_values_not_distinct_values() {
    let value = json!({"a": 1, "b": 1, "c": 1});
    let tree = Tree::new(&value);

    assert_eq!(tree.root().children().count(), 3);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_empty_containers_have_empty_children() {
    let list = json!([]);
    let map = json!({});

    let list_tree = Tree::new(&list);
    let map_tree = Tree::new(&map);

    assert_eq!(list_tree.root().child_ids(), Some(&[][..]));
    assert_eq!(map_tree.root().child_ids(), Some(&[][..]));
    assert!(!list_tree.root().is_leaf());
}

#[test]
fn test_nested_values_are_borrowed() {
    let value = json!({"a": [1, 2, 3], "b": [4, 5, 6], "c": [7, 8, 9]});
    let tree = Tree::new(&value);

    let a = tree.root().first_child().unwrap();
    assert!(std::ptr::eq(a.value(), &value["a"]));
    assert_eq!(a.children().count(), 3);
    assert_eq!(a.depth(), 1);
    assert_eq!(a.first_child().unwrap().depth(), 2);
}

#[test]
fn test_pointer_paths() {
    let value = json!({"users": [{"name": "a"}, {"na/me": "b", "t~": null}]});
    let tree = Tree::new(&value);

    assert_eq!(tree.pointer(tree.root().id()), "#");

    let users = tree.root().first_child().unwrap();
    assert_eq!(users.pointer(), "#/users");

    let second = users.children().nth(1).unwrap();
    assert_eq!(second.pointer(), "#/users/1");

    let escaped: Vec<_> = second.children().map(NodeRef::pointer).collect();
    assert_eq!(escaped, vec!["#/users/1/na~1me", "#/users/1/t~0"]);
}

#[test]
fn test_build_with_explicit_parent() {
    let root_value = json!([1]);
    let extra = json!({"k": true});

    let mut builder = TreeBuilder::new(&root_value, Some("root"));
    let root_id = NodeId(0);
    let grafted = builder.build(&extra, Some(root_id), None);
    let tree = builder.finish();

    let node = tree.get(grafted).unwrap();
    assert_eq!(node.parent().unwrap().id(), root_id);
    assert_eq!(node.children().count(), 1);
    // The parent's children still mirror its own value
    assert_eq!(tree.root().children().count(), 1);
    // Pointers stop at a node the parent does not list
    assert_eq!(node.pointer(), "#");
}

#[test]
fn test_get_out_of_range() {
    let value = json!(1);
    let tree = Tree::new(&value);

    assert!(tree.get(NodeId(0)).is_some());
    assert!(tree.get(NodeId(1)).is_none());
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    let mut value = json!(0);
    for _ in 0..20_000 {
        value = serde_json::Value::Array(vec![value]);
    }

    let tree = Tree::new(&value);
    assert_eq!(tree.len(), 20_001);

    // serde_json::Value drops recursively, so unwind it iteratively
    drop(tree);
    let mut current = value;
    while let serde_json::Value::Array(mut items) = current {
        current = items.pop().unwrap_or(serde_json::Value::Null);
    }
}

#[test]
fn test_value_kind() {
    assert_eq!(value_kind(&json!(null)), "null");
    assert_eq!(value_kind(&json!(true)), "boolean");
    assert_eq!(value_kind(&json!(1)), "integer");
    assert_eq!(value_kind(&json!(1.0)), "number");
    assert_eq!(value_kind(&json!("s")), "string");
    assert_eq!(value_kind(&json!([])), "array");
    assert_eq!(value_kind(&json!({})), "object");
}
