//! Aggregated state for one ordered node pair.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::dag::NodeId;

use super::path_state::PathState;
use super::types::{Arrow, NodePair};

/// Aggregate of every path (and spliced suffix) seen between `source` and
/// `target`.
///
/// `blocked` is the AND over all observed paths and stays `None` until the
/// first observation. Each open path adds one condition-variable set, so
/// two paths with the same interior give two entries.
///
/// Once [`set_complete`](Self::set_complete) has been called the state is
/// read-only and later updates are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePairState {
    source: NodeId,
    target: NodeId,
    blocked: Option<bool>,
    condition_var_sets: Vec<BTreeSet<NodeId>>,
    /// Interiors of blocked paths, kept so a splice can replay their verdict.
    blocked_interiors: Vec<BTreeSet<NodeId>>,
    complete: bool,
    /// Arrival direction at `source` during the exploration that completed
    /// this pair. None when `source` was the root of a search.
    arrival: Option<Arrow>,
    /// Non-endpoint nodes on the stack below `source` during that
    /// exploration. Paths through them were never walked.
    explored_under: BTreeSet<NodeId>,
}

impl NodePairState {
    /// Create an empty state for `(source, target)`.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            blocked: None,
            condition_var_sets: Vec::new(),
            blocked_interiors: Vec::new(),
            complete: false,
            arrival: None,
            explored_under: BTreeSet::new(),
        }
    }

    /// Path mode: fold in a completed path's verdict.
    pub fn update_path(&mut self, path: &PathState) {
        if self.ignored("path") {
            return;
        }
        self.and_blocked(path.is_blocked());
        if !path.is_blocked() {
            self.condition_var_sets.push(path.condition_vars().clone());
        }
    }

    /// Path mode for a concrete node sequence starting at `source`.
    ///
    /// Unlike [`update_path`](Self::update_path) this keeps the interior of
    /// a blocked path for later splicing.
    pub(crate) fn record_path(&mut self, path: &[NodeId], blocked: bool) {
        if blocked && !self.complete {
            let interior = path[1..path.len() - 1].iter().copied().collect();
            self.blocked_interiors.push(interior);
        }
        self.update_path(&PathState::from_path(path, blocked));
    }

    /// Propagation mode: splice a cached open suffix onto a prefix.
    ///
    /// Appends `suffix[1..] ∪ vars` as an open contribution.
    pub fn update_propagated(&mut self, suffix: &[NodeId], vars: &BTreeSet<NodeId>) {
        if self.ignored("propagated") {
            return;
        }
        self.and_blocked(false);
        self.condition_var_sets.push(spliced(suffix, vars));
    }

    /// Propagation mode for a cached blocked suffix.
    pub(crate) fn propagate_blocked(&mut self, suffix: &[NodeId], vars: &BTreeSet<NodeId>) {
        if self.ignored("blocked propagated") {
            return;
        }
        self.and_blocked(true);
        self.blocked_interiors.push(spliced(suffix, vars));
    }

    fn ignored(&self, kind: &str) -> bool {
        if self.complete {
            log::trace!(
                "ignoring {} update on completed pair ({}, {})",
                kind,
                self.source,
                self.target
            );
        }
        self.complete
    }

    fn and_blocked(&mut self, blocked: bool) {
        self.blocked = Some(self.blocked.map_or(blocked, |current| current && blocked));
    }

    /// Mark the pair fully explored. Further updates are ignored.
    pub fn set_complete(&mut self) {
        self.complete_with(None, BTreeSet::new());
    }

    /// First completion wins.
    pub(crate) fn complete_with(&mut self, arrival: Option<Arrow>, explored_under: BTreeSet<NodeId>) {
        if !self.complete {
            self.complete = true;
            self.arrival = arrival;
            self.explored_under = explored_under;
        }
    }

    /// True once the pair has been fully explored.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True if this completed pair can stand in for a fresh exploration of
    /// `source` entered with `arrival` while `on_path` is on the stack.
    ///
    /// Every node the cached exploration had to avoid must still be on the
    /// stack; otherwise paths through it would be missing.
    pub(crate) fn reusable_from(&self, arrival: Option<Arrow>, on_path: &HashSet<NodeId>) -> bool {
        self.complete
            && self.arrival == arrival
            && self.explored_under.iter().all(|node| on_path.contains(node))
    }

    /// The `(source, target)` key.
    #[inline]
    pub fn pair(&self) -> NodePair {
        (self.source, self.target)
    }

    /// AND-aggregate of observed verdicts; None before any observation.
    #[inline]
    pub fn blocked(&self) -> Option<bool> {
        self.blocked
    }

    /// True only if paths were observed and every one was blocked.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked == Some(true)
    }

    /// One set per open path, in discovery order.
    #[inline]
    pub fn condition_var_sets(&self) -> &[BTreeSet<NodeId>] {
        &self.condition_var_sets
    }

    #[inline]
    pub(crate) fn blocked_interiors(&self) -> &[BTreeSet<NodeId>] {
        &self.blocked_interiors
    }

    /// Number of open paths observed.
    #[inline]
    pub fn open_path_count(&self) -> usize {
        self.condition_var_sets.len()
    }
}

fn spliced(suffix: &[NodeId], vars: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut set: BTreeSet<NodeId> = suffix.iter().skip(1).copied().collect();
    set.extend(vars.iter().copied());
    set
}

impl fmt::Display for NodePairState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.blocked {
            Some(blocked) => writeln!(f, "Blocked: {blocked}")?,
            None => writeln!(f, "Blocked: unknown")?,
        }
        if !self.is_blocked() && !self.condition_var_sets.is_empty() {
            let sets: Vec<String> = self
                .condition_var_sets
                .iter()
                .map(|set| {
                    let vars: Vec<String> = set.iter().map(ToString::to_string).collect();
                    format!("{{{}}}", vars.join(","))
                })
                .collect();
            writeln!(f, "To block path, condition on: {}", sets.join(","))?;
        }
        Ok(())
    }
}
