use super::*;
use crate::model::{OperationLeaf, Parameter, ParameterLocation};

fn leaf(uri: &str) -> NodeKind {
    NodeKind::Operation(OperationLeaf {
        uri: uri.to_string(),
        parameters: vec![Parameter::new("id", ParameterLocation::Path)],
        query_items: vec![],
    })
}

fn small_tree() -> (CatalogTree, NodeId, NodeId, NodeId) {
    let mut tree = CatalogTree::new("root");
    let tag = tree.add_child(tree.root(), "pet", NodeKind::Plain).unwrap();
    let path = tree.add_child(tag, "/pet/{id}", NodeKind::Plain).unwrap();
    let get = tree.add_child(path, "GET", leaf("https://h/pet/{id}")).unwrap();
    (tree, tag, path, get)
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = CatalogTree::new("root");
    let root = tree.root();
    for label in ["b", "a", "c"] {
        tree.add_child(root, label, NodeKind::Plain).unwrap();
    }

    let labels: Vec<&str> = tree.children(root).iter().map(|id| tree.label(*id)).collect();
    assert_eq!(labels, vec!["b", "a", "c"]);
}

#[test]
fn test_parent_links_point_upwards() {
    let (tree, tag, path, get) = small_tree();

    assert_eq!(tree.parent(tree.root()), None);
    assert_eq!(tree.parent(tag), Some(tree.root()));
    assert_eq!(tree.parent(path), Some(tag));
    assert_eq!(tree.parent(get), Some(path));
}

#[test]
fn test_operation_leaf_rejects_children() {
    let (mut tree, _, _, get) = small_tree();

    let err = tree.add_child(get, "nested", NodeKind::Plain).unwrap_err();
    assert!(matches!(err, CatalogError::LeafHasChildren(label) if label == "GET"));

    let other = CatalogTree::new("other");
    assert!(tree.graft(get, &other, other.root()).is_err());
    assert!(tree.children(get).is_empty());
}

#[test]
fn test_descendants_are_pre_order() {
    let (mut tree, tag, _, _) = small_tree();
    tree.add_child(tag, "/pet/findByStatus", NodeKind::Plain).unwrap();

    let labels: Vec<&str> = tree
        .descendants(tree.root())
        .into_iter()
        .map(|id| tree.label(id))
        .collect();
    assert_eq!(
        labels,
        vec!["root", "pet", "/pet/{id}", "GET", "/pet/findByStatus"]
    );
}

#[test]
fn test_expand_and_collapse_are_recursive() {
    let (mut tree, tag, path, get) = small_tree();

    tree.expand_all(tag);
    assert!(!tree.node(tree.root()).expanded);
    assert!(tree.node(tag).expanded);
    assert!(tree.node(path).expanded);
    assert!(tree.node(get).expanded);

    tree.collapse_all(path);
    assert!(tree.node(tag).expanded);
    assert!(!tree.node(path).expanded);
    assert!(!tree.node(get).expanded);
}

#[test]
fn test_subtree_is_an_independent_copy() {
    let (tree, tag, _, _) = small_tree();

    let mut copy = tree.subtree(tag);
    assert_eq!(copy.label(copy.root()), "pet");
    assert_eq!(copy.len(), 3);

    let copy_root = copy.root();
    copy.add_child(copy_root, "/pet/extra", NodeKind::Plain).unwrap();
    assert_eq!(tree.children(tag).len(), 1);
}

#[test]
fn test_subtree_of_a_leaf_keeps_the_operation() {
    let (tree, _, _, get) = small_tree();

    let copy = tree.subtree(get);
    assert!(copy.node(copy.root()).is_operation());
}

#[test]
fn test_equality_is_structural_and_ignores_expansion() {
    let (mut left, _, _, _) = small_tree();
    let (right, _, _, _) = small_tree();
    let root = left.root();
    left.expand_all(root);
    assert_eq!(left, right);

    let (mut changed, tag, _, _) = small_tree();
    changed.add_child(tag, "/pet/other", NodeKind::Plain).unwrap();
    assert_ne!(changed, right);
}

#[test]
fn test_equality_compares_leaf_fields() {
    let mut left = CatalogTree::new("root");
    let mut right = CatalogTree::new("root");
    left.add_child(left.root(), "GET", leaf("https://h/a")).unwrap();
    right.add_child(right.root(), "GET", leaf("https://h/b")).unwrap();

    assert_ne!(left, right);
}

#[test]
fn test_get_is_checked_for_foreign_ids() {
    let (tree, _, _, get) = small_tree();
    let single = CatalogTree::new("single");

    assert!(single.get(get).is_none());
    assert_eq!(tree.get(get).map(|node| node.label.as_str()), Some("GET"));
}

#[test]
fn test_unchecked_copy_keeps_kind_and_expansion() {
    let (mut source, tag, _, _) = small_tree();
    source.expand_all(tag);
    let mut target = CatalogTree::new("target");
    let target_root = target.root();

    let copy = target.push_copy(target_root, &source, tag);
    assert_eq!(target.subtree(copy), source.subtree(tag));
    assert!(target
        .descendants(copy)
        .into_iter()
        .all(|id| target.node(id).expanded));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_unchecked_insert_under_leaf_panics_in_debug() {
    let (mut tree, _, _, get) = small_tree();
    tree.push_node(get, "nested".to_string(), NodeKind::Plain);
}
