//! Backdoor Path Analysis and Adjustment-Set Selection
//!
//! Given a causal DAG, a treatment set X and an outcome set Y, this crate
//! enumerates the backdoor paths between them, decides which are already
//! blocked by graph structure, and picks a small set of variables that
//! closes the rest when conditioned on.
//!
//! # Architecture
//!
//! - **dag**: Labeled DAG, the `CausalGraph` trait, JSON / adjacency-matrix import
//! - **backdoor**: Direction-aware iterative DFS with per-pair memoization
//! - **hitting_set**: Greedy and exact hitting-set solvers
//! - **identify**: End-to-end adjustment-set identification
//! - **config**: Search and solver configuration
//! - **error**: Error handling with BackdoorError
//!
//! # Example
//!
//! ```
//! use causal_graph_backdoor::config::SearchConfig;
//! use causal_graph_backdoor::dag::CausalDag;
//! use causal_graph_backdoor::error::BackdoorResult;
//! use causal_graph_backdoor::identify::identify_by_labels;
//!
//! fn example() -> BackdoorResult<()> {
//!     let dag = CausalDag::from_edges(
//!         ["U", "A", "C"],
//!         [("U", "A"), ("U", "C"), ("A", "C")],
//!     )?;
//!     let report = identify_by_labels(&dag, &["A"], &["C"], &SearchConfig::default())?;
//!     assert_eq!(report.adjustment_labels(&dag), vec!["U".to_string()]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod backdoor;
pub mod config;
pub mod dag;
pub mod error;
pub mod hitting_set;
pub mod identify;

// Re-exports for convenience
pub use backdoor::{Arrow, BackdoorPathFinder, NodePair, NodePairState, PairStateMap, PathState};
pub use config::{HittingSetStrategy, SearchConfig};
pub use dag::{CausalDag, CausalGraph, DagDescription, NodeId};
pub use error::{BackdoorError, BackdoorResult};
pub use hitting_set::{is_hitting_set, MinimalHittingSet};
pub use identify::{identify_adjustment_set, identify_by_labels, AdjustmentReport};
