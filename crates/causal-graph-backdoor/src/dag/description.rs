//! Serializable DAG descriptions and adjacency-matrix import.
//!
//! Structure-learning tools hand back a weighted adjacency matrix plus the
//! column labels; a nonzero entry `m[i][j]` means an edge `labels[i] →
//! labels[j]`. [`DagDescription`] is the JSON form used by the CLI:
//!
//! ```json
//! { "nodes": ["U", "A", "C"], "edges": [["U", "A"], ["U", "C"], ["A", "C"]] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BackdoorError, BackdoorResult};

use super::graph::CausalDag;

/// Labeled node and edge lists for a causal DAG.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DagDescription {
    /// Node labels. Edge endpoints missing here are added in edge order.
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Directed edges as `[from, to]` label pairs.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl DagDescription {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> BackdoorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the description as pretty JSON.
    pub fn to_json(&self) -> BackdoorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the DAG and check it is acyclic.
    ///
    /// # Errors
    /// `DuplicateNode`, `SelfLoop`, or `CycleDetected`.
    pub fn into_dag(self) -> BackdoorResult<CausalDag> {
        let mut dag = CausalDag::new();
        for label in self.nodes {
            dag.add_node(label)?;
        }
        for (from, to) in &self.edges {
            let from = dag.ensure_node(from);
            let to = dag.ensure_node(to);
            dag.add_edge_by_id(from, to)?;
        }
        dag.validate()?;
        Ok(dag)
    }
}

impl From<&CausalDag> for DagDescription {
    fn from(dag: &CausalDag) -> Self {
        let labels = dag.labels();
        Self {
            nodes: labels.to_vec(),
            edges: dag
                .edges()
                .map(|(from, to)| (labels[from].clone(), labels[to].clone()))
                .collect(),
        }
    }
}

impl CausalDag {
    /// Build a DAG from a square adjacency matrix.
    ///
    /// `matrix[i][j] != 0.0` adds `labels[i] → labels[j]`. NaN entries are
    /// treated as absent edges.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the matrix is not `labels.len()` square
    /// - `DuplicateNode` for repeated labels
    /// - `SelfLoop` for a nonzero diagonal entry
    /// - `CycleDetected` if the edges are not acyclic
    pub fn from_adjacency_matrix<S: AsRef<str>>(
        matrix: &[Vec<f64>],
        labels: &[S],
    ) -> BackdoorResult<Self> {
        if matrix.len() != labels.len() {
            return Err(BackdoorError::DimensionMismatch {
                expected: labels.len(),
                actual: matrix.len(),
            });
        }
        if let Some(row) = matrix.iter().find(|row| row.len() != labels.len()) {
            return Err(BackdoorError::DimensionMismatch {
                expected: labels.len(),
                actual: row.len(),
            });
        }

        let mut dag = CausalDag::new();
        for label in labels {
            dag.add_node(label.as_ref())?;
        }

        for (from, row) in matrix.iter().enumerate() {
            for (to, &weight) in row.iter().enumerate() {
                if weight.is_nan() {
                    tracing::warn!(from, to, "NaN adjacency entry treated as no edge");
                    continue;
                }
                if weight != 0.0 {
                    dag.add_edge_by_id(from, to)?;
                }
            }
        }

        dag.validate()?;
        Ok(dag)
    }
}
