//! Construction tests for CausalDag.

use crate::dag::{CausalDag, CausalGraph};
use crate::error::BackdoorError;

#[test]
fn test_from_edges_interns_labels_in_order() {
    let dag = CausalDag::from_edges(["U", "A", "C"], [("U", "A"), ("U", "C"), ("A", "C")])
        .expect("build failed");

    assert_eq!(dag.node_count(), 3);
    assert_eq!(dag.edge_count(), 3);
    assert_eq!(dag.node_id("U"), Some(0));
    assert_eq!(dag.node_id("A"), Some(1));
    assert_eq!(dag.node_id("C"), Some(2));
    assert_eq!(dag.label(2), Some("C"));
    assert_eq!(dag.label(3), None);
}

#[test]
fn test_has_edge_is_directed() {
    let dag = CausalDag::from_edges(["A", "B"], [("A", "B")]).expect("build failed");
    assert!(dag.has_edge(0, 1));
    assert!(!dag.has_edge(1, 0));
    assert!(!dag.has_edge(0, 7), "unknown ids never have edges");
}

#[test]
fn test_skeleton_neighbors_are_symmetric_and_sorted() {
    let dag = CausalDag::from_edges(
        ["A", "B", "C", "D"],
        [("D", "A"), ("A", "C"), ("B", "A")],
    )
    .expect("build failed");

    assert_eq!(dag.neighbors(0), &[1, 2, 3]);
    assert_eq!(dag.neighbors(1), &[0]);
    assert_eq!(dag.neighbors(2), &[0]);
    assert_eq!(dag.neighbors(3), &[0]);
    assert!(dag.neighbors(99).is_empty());
}

#[test]
fn test_duplicate_edge_is_idempotent() {
    let mut dag = CausalDag::from_edges(["A", "B"], [("A", "B")]).expect("build failed");
    dag.add_edge("A", "B").expect("re-adding edge failed");
    assert_eq!(dag.edge_count(), 1);
    assert_eq!(dag.neighbors(0), &[1]);
}

#[test]
fn test_duplicate_node_rejected() {
    let mut dag = CausalDag::new();
    dag.add_node("A").expect("first insert failed");
    let err = dag.add_node("A").unwrap_err();
    assert!(matches!(err, BackdoorError::DuplicateNode(ref label) if label == "A"));
}

#[test]
fn test_unknown_label_rejected() {
    let err = CausalDag::from_edges(["A"], [("A", "Ghost")]).unwrap_err();
    assert!(matches!(err, BackdoorError::NodeNotFound(ref label) if label == "Ghost"));
}

#[test]
fn test_self_loop_rejected() {
    let err = CausalDag::from_edges(["A"], [("A", "A")]).unwrap_err();
    assert!(matches!(err, BackdoorError::SelfLoop(ref label) if label == "A"));
}

#[test]
fn test_add_edge_by_id_out_of_range() {
    let mut dag = CausalDag::new();
    dag.add_node("A").expect("insert failed");
    let err = dag.add_edge_by_id(0, 5).unwrap_err();
    assert!(matches!(err, BackdoorError::NodeNotFound(_)));
}

#[test]
fn test_parents_children_and_edges() {
    let dag = CausalDag::from_edges(
        ["Z", "X", "Y"],
        [("Z", "X"), ("Z", "Y"), ("X", "Y")],
    )
    .expect("build failed");

    assert_eq!(dag.parents(2).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(dag.children(0).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(dag.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
    assert_eq!(dag.parents(42).count(), 0);
}

#[test]
fn test_resolve_and_labels_of() {
    let dag = CausalDag::from_edges(["A", "B", "C"], [("A", "B")]).expect("build failed");

    let set = dag.resolve(["C", "A"]).expect("resolve failed");
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    assert!(dag.resolve(["A", "Nope"]).is_err());

    let labels = dag.labels_of(&[2, 0, 9]);
    assert_eq!(labels, vec!["C".to_string(), "A".to_string()]);
}

#[test]
fn test_ensure_node_reuses_existing() {
    let mut dag = CausalDag::new();
    let a = dag.ensure_node("A");
    let again = dag.ensure_node("A");
    let b = dag.ensure_node("B");
    assert_eq!(a, again);
    assert_ne!(a, b);
    assert_eq!(dag.node_count(), 2);
}
