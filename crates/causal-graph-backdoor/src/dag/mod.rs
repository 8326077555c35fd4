//! Causal DAG representation.
//!
//! The search code runs against the [`CausalGraph`] trait: a directed-edge
//! test plus skeleton (undirected) neighbor lists. [`CausalDag`] is the
//! concrete labeled implementation. Labels are interned into dense
//! [`NodeId`]s so every map key and set in the crate uses one canonical,
//! hashable identifier.
//!
//! # Construction
//!
//! - Incrementally via [`CausalDag::add_node`] / [`CausalDag::add_edge`]
//! - From a labeled adjacency matrix ([`CausalDag::from_adjacency_matrix`]),
//!   the shape structure-learning tools emit
//! - From a JSON [`DagDescription`]

mod description;
mod graph;

#[cfg(test)]
mod tests;

pub use self::description::DagDescription;
pub use self::graph::{CausalDag, CausalGraph, NodeId};
