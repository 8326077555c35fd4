//! Graph fixtures shared by integration tests.

#![allow(dead_code)]

use causal_graph_backdoor::CausalDag;

/// U→A, U→C, A→C: a single confounder.
pub fn confounded_dag() -> CausalDag {
    CausalDag::from_edges(["U", "A", "C"], [("U", "A"), ("U", "C"), ("A", "C")])
        .expect("Failed to build confounded DAG")
}

/// A→B→C, A→C: causal paths only.
pub fn mediated_dag() -> CausalDag {
    CausalDag::from_edges(["A", "B", "C"], [("A", "B"), ("B", "C"), ("A", "C")])
        .expect("Failed to build mediated DAG")
}

/// Pearl's seven-variable example without the mediator's parents:
/// Z1→Z3←Z2, Z1→X, Z3→X, Z3→Y, Z2→Y, X→W→Y.
pub fn pearl_dag() -> CausalDag {
    CausalDag::from_edges(
        ["Z1", "Z2", "Z3", "X", "W", "Y"],
        [
            ("Z1", "Z3"),
            ("Z2", "Z3"),
            ("Z1", "X"),
            ("Z3", "X"),
            ("Z3", "Y"),
            ("Z2", "Y"),
            ("X", "W"),
            ("W", "Y"),
        ],
    )
    .expect("Failed to build Pearl DAG")
}

/// M-bias: X←U1→M←U2→Y plus X→Y.
pub fn m_bias_dag() -> CausalDag {
    CausalDag::from_edges(
        ["X", "U1", "M", "U2", "Y"],
        [("U1", "X"), ("U1", "M"), ("U2", "M"), ("U2", "Y"), ("X", "Y")],
    )
    .expect("Failed to build M-bias DAG")
}

/// Layered DAG: every node may point to nodes in the next layer.
///
/// Deterministic LCG so failures reproduce from the seed alone.
pub fn layered_dag(seed: u64, layers: usize, width: usize, density_percent: u64) -> CausalDag {
    let mut state = seed;
    let mut dag = CausalDag::new();
    for layer in 0..layers {
        for slot in 0..width {
            dag.add_node(format!("L{layer}_{slot}")).expect("add_node failed");
        }
    }
    for layer in 0..layers.saturating_sub(1) {
        for from in 0..width {
            for to in 0..width {
                state = state.wrapping_mul(1103515245).wrapping_add(12345);
                if (state >> 16) % 100 < density_percent {
                    dag.add_edge_by_id(layer * width + from, (layer + 1) * width + to)
                        .expect("add_edge failed");
                }
            }
        }
    }
    dag
}
