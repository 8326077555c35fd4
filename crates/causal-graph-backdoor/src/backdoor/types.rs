//! Type definitions for backdoor search.

use std::collections::HashMap;

use crate::dag::{CausalGraph, NodeId};

use super::pair_state::NodePairState;

/// Ordered `(from, to)` node pair used as the memo key.
pub type NodePair = (NodeId, NodeId);

/// Shared result map: one state per ordered node pair.
pub type PairStateMap = HashMap<NodePair, NodePairState>;

/// Direction of a path edge relative to the node the walk is standing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// The edge points into the current node.
    Incoming,
    /// The edge leaves the current node.
    Outgoing,
}

impl Arrow {
    /// Classify the step `current - next` as seen from `current`.
    #[inline]
    pub fn classify<G: CausalGraph + ?Sized>(graph: &G, current: NodeId, next: NodeId) -> Self {
        if graph.has_edge(current, next) {
            Arrow::Outgoing
        } else {
            Arrow::Incoming
        }
    }

    /// The same edge seen from its other endpoint.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Arrow::Incoming => Arrow::Outgoing,
            Arrow::Outgoing => Arrow::Incoming,
        }
    }
}
