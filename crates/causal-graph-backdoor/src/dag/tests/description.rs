//! DagDescription and adjacency-matrix import tests.

use crate::dag::{CausalDag, CausalGraph, DagDescription};
use crate::error::BackdoorError;

#[test]
fn test_description_from_json_builds_dag() {
    let json = r#"{
        "nodes": ["U", "A", "C"],
        "edges": [["U", "A"], ["U", "C"], ["A", "C"]]
    }"#;
    let dag = DagDescription::from_json(json)
        .expect("parse failed")
        .into_dag()
        .expect("build failed");

    assert_eq!(dag.node_count(), 3);
    assert!(dag.has_edge(0, 1));
    assert!(dag.has_edge(0, 2));
    assert!(dag.has_edge(1, 2));
}

#[test]
fn test_description_adds_undeclared_endpoints() {
    let json = r#"{ "edges": [["A", "B"], ["B", "C"]] }"#;
    let dag = DagDescription::from_json(json)
        .expect("parse failed")
        .into_dag()
        .expect("build failed");
    assert_eq!(dag.labels(), &["A".to_string(), "B".to_string(), "C".to_string()]);
}

#[test]
fn test_description_rejects_cycle() {
    let json = r#"{ "edges": [["A", "B"], ["B", "A"]] }"#;
    let err = DagDescription::from_json(json)
        .expect("parse failed")
        .into_dag()
        .unwrap_err();
    assert!(matches!(err, BackdoorError::CycleDetected(_)));
}

#[test]
fn test_description_invalid_json() {
    let err = DagDescription::from_json("{ nodes: ").unwrap_err();
    assert!(matches!(err, BackdoorError::Serialization(_)));
}

#[test]
fn test_description_from_dag_preserves_structure() {
    let dag = CausalDag::from_edges(["Z", "X", "Y"], [("Z", "X"), ("X", "Y")]).expect("build failed");
    let description = DagDescription::from(&dag);
    assert_eq!(description.nodes, vec!["Z", "X", "Y"]);
    assert_eq!(
        description.edges,
        vec![
            ("Z".to_string(), "X".to_string()),
            ("X".to_string(), "Y".to_string())
        ]
    );

    let rebuilt = DagDescription::from_json(&description.to_json().expect("render failed"))
        .expect("parse failed")
        .into_dag()
        .expect("build failed");
    assert_eq!(rebuilt, dag);
}

#[test]
fn test_adjacency_matrix_import() {
    // Weighted output of a structure learner: U -> A (0.8), U -> C (-0.3), A -> C (1.2)
    let matrix = vec![
        vec![0.0, 0.8, -0.3],
        vec![0.0, 0.0, 1.2],
        vec![0.0, 0.0, 0.0],
    ];
    let dag = CausalDag::from_adjacency_matrix(&matrix, &["U", "A", "C"]).expect("import failed");

    assert_eq!(dag.edge_count(), 3);
    assert!(dag.has_edge(0, 1));
    assert!(dag.has_edge(0, 2), "negative weights are edges");
    assert!(dag.has_edge(1, 2));
    assert!(!dag.has_edge(2, 0));
}

#[test]
fn test_adjacency_matrix_ignores_nan() {
    let matrix = vec![vec![0.0, f64::NAN], vec![0.0, 0.0]];
    let dag = CausalDag::from_adjacency_matrix(&matrix, &["A", "B"]).expect("import failed");
    assert_eq!(dag.edge_count(), 0);
}

#[test]
fn test_adjacency_matrix_shape_errors() {
    let not_enough_rows = vec![vec![0.0, 1.0]];
    let err = CausalDag::from_adjacency_matrix(&not_enough_rows, &["A", "B"]).unwrap_err();
    assert!(matches!(
        err,
        BackdoorError::DimensionMismatch { expected: 2, actual: 1 }
    ));

    let ragged = vec![vec![0.0, 1.0], vec![0.0]];
    let err = CausalDag::from_adjacency_matrix(&ragged, &["A", "B"]).unwrap_err();
    assert!(matches!(
        err,
        BackdoorError::DimensionMismatch { expected: 2, actual: 1 }
    ));
}

#[test]
fn test_adjacency_matrix_rejects_diagonal_and_cycles() {
    let diagonal = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
    let err = CausalDag::from_adjacency_matrix(&diagonal, &["A", "B"]).unwrap_err();
    assert!(matches!(err, BackdoorError::SelfLoop(_)));

    let cyclic = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let err = CausalDag::from_adjacency_matrix(&cyclic, &["A", "B"]).unwrap_err();
    assert!(matches!(err, BackdoorError::CycleDetected(_)));
}
