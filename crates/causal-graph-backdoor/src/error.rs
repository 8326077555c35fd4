//! Error types for backdoor path analysis.
//!
//! This module provides error handling for every stage of the pipeline:
//! DAG construction, search preconditions, the path budget, and the
//! hitting-set solvers.
//!
//! Preconditions are checked before any search starts. Solver failures are
//! surfaced as named variants; a failing call never hands back a partial
//! adjustment set.

use thiserror::Error;

/// Result type alias for backdoor operations.
pub type BackdoorResult<T> = Result<T, BackdoorError>;

/// Error type for all backdoor analysis operations.
///
/// Each variant carries enough context to explain the failure without a
/// debugger. Nothing here is retryable: the algorithms are deterministic over
/// static input.
#[derive(Error, Debug)]
pub enum BackdoorError {
    // ========== Graph Structure Errors ==========
    /// Node label or id not present in the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Node label registered twice.
    #[error("Duplicate node label: {0}")]
    DuplicateNode(String),

    /// Edge from a node to itself.
    #[error("Self-loop on node: {0}")]
    SelfLoop(String),

    /// Graph is not acyclic. Direction classification is undefined on cycles.
    #[error("Cycle detected at node: {0}")]
    CycleDetected(String),

    /// Adjacency matrix shape does not match the label list.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // ========== Search Errors ==========
    /// Treatment or outcome set is empty.
    #[error("Empty {0} set: at least one node is required")]
    EmptyNodeSet(&'static str),

    /// The configured path budget was exhausted before the search finished.
    #[error("Path budget exceeded: more than {0} candidate paths")]
    PathBudgetExceeded(usize),

    // ========== Hitting Set Errors ==========
    /// An open backdoor path has no interior node, so no conditioning set
    /// can block it (e.g. a direct edge from outcome into treatment).
    #[error("Uncoverable backdoor path at index {index}: no interior variable can block it")]
    UncoverablePath { index: usize },

    /// Exact solver refused an input with too many distinct variables.
    #[error("Exact hitting set refused: {candidates} candidate variables exceeds limit {limit}")]
    ExactSolverLimit { candidates: usize, limit: usize },

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Serialization Errors ==========
    /// Graph description could not be parsed or written.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BackdoorError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json errors include line/column info in to_string()
        BackdoorError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(BackdoorError: Send, Sync, std::error::Error);
