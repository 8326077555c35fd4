//! Backdoor path finder.
//!
//! ITERATIVE depth-first search over the DAG skeleton. Each frame holds the
//! node, the direction the walk arrived from, and a cursor into the node's
//! neighbor slice, so a single `Vec<Frame>` replaces the call stack.

use std::collections::{BTreeSet, HashSet};

use crate::config::SearchConfig;
use crate::dag::{CausalGraph, NodeId};
use crate::error::{BackdoorError, BackdoorResult};

use super::pair_state::NodePairState;
use super::types::{Arrow, NodePair, PairStateMap};

/// One level of the explicit DFS stack.
struct Frame<'g> {
    node: NodeId,
    /// Direction of the edge used to enter `node`; None at the source.
    arrival: Option<Arrow>,
    neighbors: &'g [NodeId],
    cursor: usize,
}

impl<'g> Frame<'g> {
    fn new<G: CausalGraph + ?Sized>(graph: &'g G, node: NodeId, arrival: Option<Arrow>) -> Self {
        Self {
            node,
            arrival,
            neighbors: graph.neighbors(node),
            cursor: 0,
        }
    }

    fn next_neighbor(&mut self) -> Option<NodeId> {
        let next = self.neighbors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

/// Finds backdoor paths from every treatment to every outcome.
///
/// Results accumulate in a [`PairStateMap`] owned by the finder and shared
/// across the whole treatment × outcome batch; pairs completed by one search
/// are reused by later ones.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use causal_graph_backdoor::backdoor::BackdoorPathFinder;
/// use causal_graph_backdoor::config::SearchConfig;
/// use causal_graph_backdoor::dag::CausalDag;
///
/// let dag = CausalDag::from_edges(
///     ["U", "A", "C"],
///     [("U", "A"), ("U", "C"), ("A", "C")],
/// ).unwrap();
/// let (a, c, u) = (dag.require("A").unwrap(), dag.require("C").unwrap(), dag.require("U").unwrap());
///
/// let mut finder = BackdoorPathFinder::new(&dag, [a], [c], SearchConfig::default()).unwrap();
/// finder.get_backdoor_paths().unwrap();
///
/// let state = finder.pair_state(a, c).unwrap();
/// assert_eq!(state.condition_var_sets(), &[BTreeSet::from([u])]);
/// ```
pub struct BackdoorPathFinder<'g, G: CausalGraph + ?Sized> {
    graph: &'g G,
    treatments: BTreeSet<NodeId>,
    outcomes: BTreeSet<NodeId>,
    /// X ∪ Y. These may only appear as path endpoints.
    endpoints: HashSet<NodeId>,
    config: SearchConfig,
    pair_states: PairStateMap,
    paths_charged: usize,
}

impl<'g, G: CausalGraph + ?Sized> BackdoorPathFinder<'g, G> {
    /// Create a finder after checking every precondition.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation
    /// - `EmptyNodeSet` if either node set is empty
    /// - `NodeNotFound` for an id outside the graph
    /// - `CycleDetected` if the graph is not acyclic
    pub fn new<X, Y>(graph: &'g G, treatments: X, outcomes: Y, config: SearchConfig) -> BackdoorResult<Self>
    where
        X: IntoIterator<Item = NodeId>,
        Y: IntoIterator<Item = NodeId>,
    {
        config.validate()?;

        let treatments: BTreeSet<NodeId> = treatments.into_iter().collect();
        let outcomes: BTreeSet<NodeId> = outcomes.into_iter().collect();
        if treatments.is_empty() {
            return Err(BackdoorError::EmptyNodeSet("treatment"));
        }
        if outcomes.is_empty() {
            return Err(BackdoorError::EmptyNodeSet("outcome"));
        }

        if let Some(&missing) = treatments
            .iter()
            .chain(outcomes.iter())
            .find(|&&node| !graph.contains_node(node))
        {
            return Err(BackdoorError::NodeNotFound(format!("#{missing}")));
        }

        if let Some(node) = graph.find_cycle() {
            return Err(BackdoorError::CycleDetected(graph.describe(node)));
        }

        let endpoints = treatments.iter().chain(outcomes.iter()).copied().collect();

        Ok(Self {
            graph,
            treatments,
            outcomes,
            endpoints,
            config,
            pair_states: PairStateMap::new(),
            paths_charged: 0,
        })
    }

    /// Run the search for every `(x, y)` pair not already complete.
    ///
    /// Pairs with `x == y` are skipped. On `PathBudgetExceeded` the
    /// incomplete pairs are dropped and completed ones are kept.
    pub fn get_backdoor_paths(&mut self) -> BackdoorResult<&PairStateMap> {
        let pairs: Vec<NodePair> = self
            .treatments
            .iter()
            .flat_map(|&x| self.outcomes.iter().map(move |&y| (x, y)))
            .collect();

        for (x, y) in pairs {
            if x == y {
                log::debug!("Skipping pair ({x}, {y}): treatment is also an outcome");
                continue;
            }
            if self.pair_states.get(&(x, y)).is_some_and(NodePairState::is_complete) {
                continue;
            }
            if let Err(err) = self.search(x, y) {
                self.pair_states.retain(|_, state| state.is_complete());
                return Err(err);
            }
        }

        Ok(&self.pair_states)
    }

    fn search(&mut self, source: NodeId, target: NodeId) -> BackdoorResult<()> {
        let graph = self.graph;
        let mut path: Vec<NodeId> = vec![source];
        let mut on_path: HashSet<NodeId> = HashSet::from([source]);
        let mut stack: Vec<Frame<'g>> = vec![Frame::new(graph, source, None)];
        let mut recorded = 0usize;

        while let Some(frame) = stack.last_mut() {
            let current = frame.node;
            let arrival = frame.arrival;

            let Some(next) = frame.next_neighbor() else {
                // Frame exhausted: every branch below `current` is done.
                stack.pop();
                path.pop();
                on_path.remove(&current);
                let endpoints = &self.endpoints;
                if let Some(state) = self.pair_states.get_mut(&(current, target)) {
                    if !state.is_complete() {
                        let explored_under = on_path
                            .iter()
                            .copied()
                            .filter(|node| !endpoints.contains(node))
                            .collect();
                        state.complete_with(arrival, explored_under);
                    }
                }
                continue;
            };

            if on_path.contains(&next) {
                continue;
            }

            let step = Arrow::classify(graph, current, next);
            // The first edge must point into the source.
            if arrival.is_none() && step == Arrow::Outgoing {
                continue;
            }
            let collider = arrival == Some(Arrow::Incoming) && step == Arrow::Incoming;

            if next == target {
                self.charge_path()?;
                path.push(next);
                self.record(&path, collider);
                path.pop();
                recorded += 1;
                continue;
            }

            if self.endpoints.contains(&next) || collider {
                continue;
            }

            let next_arrival = Some(step.reversed());
            if self.config.reuse_completed_pairs
                && self
                    .pair_states
                    .get(&(next, target))
                    .is_some_and(|state| state.reusable_from(next_arrival, &on_path))
            {
                recorded += self.splice_cached(&path, &on_path, next, target)?;
                continue;
            }

            path.push(next);
            on_path.insert(next);
            stack.push(Frame::new(graph, next, next_arrival));
        }

        log::debug!(
            "Backdoor search complete: {} -> {}, {} paths recorded, {} charged in total",
            graph.describe(source),
            graph.describe(target),
            recorded,
            self.paths_charged
        );

        Ok(())
    }

    /// Record a qualifying path and every suffix of it.
    ///
    /// Suffixes share the path's verdict: a pair `(n_i, target)` describes
    /// continuations from `n_i` given the direction the walk arrived at it,
    /// so a collider at `path[k - 1]` blocks every suffix.
    fn record(&mut self, path: &[NodeId], blocked: bool) {
        let k = path.len() - 1;
        let target = path[k];
        log::trace!("Recording path {:?} (blocked: {})", path, blocked);

        for i in 0..k {
            self.pair_states
                .entry((path[i], target))
                .or_insert_with(|| NodePairState::new(path[i], target))
                .record_path(&path[i..], blocked);
        }
    }

    /// Splice the cached paths of `(next, target)` onto every live prefix.
    /// Returns the number of cached paths spliced.
    ///
    /// Cached paths through a node already on the stack are skipped, which
    /// leaves exactly the paths a fresh walk from `next` would find.
    fn splice_cached(
        &mut self,
        path: &[NodeId],
        on_path: &HashSet<NodeId>,
        next: NodeId,
        target: NodeId,
    ) -> BackdoorResult<usize> {
        let avoids_stack = |set: &&BTreeSet<NodeId>| set.iter().all(|node| !on_path.contains(node));
        let (open, blocked): (Vec<BTreeSet<NodeId>>, Vec<BTreeSet<NodeId>>) =
            match self.pair_states.get(&(next, target)) {
                Some(state) => (
                    state.condition_var_sets().iter().filter(avoids_stack).cloned().collect(),
                    state.blocked_interiors().iter().filter(avoids_stack).cloned().collect(),
                ),
                None => return Ok(0),
            };

        let mut suffix: Vec<NodeId> = path.to_vec();
        suffix.push(next);

        for (vars, is_blocked) in open
            .iter()
            .map(|vars| (vars, false))
            .chain(blocked.iter().map(|vars| (vars, true)))
        {
            self.charge_path()?;
            log::trace!(
                "Reusing ({next}, {target}) for prefix {:?} with {:?} (blocked: {})",
                path,
                vars,
                is_blocked
            );
            for (i, &node) in path.iter().enumerate() {
                let state = self
                    .pair_states
                    .entry((node, target))
                    .or_insert_with(|| NodePairState::new(node, target));
                if is_blocked {
                    state.propagate_blocked(&suffix[i..], vars);
                } else {
                    state.update_propagated(&suffix[i..], vars);
                }
            }
        }

        Ok(open.len() + blocked.len())
    }

    fn charge_path(&mut self) -> BackdoorResult<()> {
        self.paths_charged += 1;
        match self.config.max_paths {
            Some(max) if self.paths_charged > max => {
                log::debug!("Path budget exhausted at {} paths", max);
                Err(BackdoorError::PathBudgetExceeded(max))
            }
            _ => Ok(()),
        }
    }

    /// Check the backdoor qualification for a concrete path.
    ///
    /// True iff the path has at least one edge, its first edge points into
    /// `path[0]`, and no interior node is a treatment or outcome.
    pub fn is_backdoor_path(&self, path: &[NodeId]) -> bool {
        if path.len() < 2 {
            return false;
        }
        self.graph.has_edge(path[1], path[0])
            && path[1..path.len() - 1]
                .iter()
                .all(|node| !self.endpoints.contains(node))
    }

    /// State for `(source, target)`, if any path between them was seen.
    pub fn pair_state(&self, source: NodeId, target: NodeId) -> Option<&NodePairState> {
        self.pair_states.get(&(source, target))
    }

    /// The whole result map, including suffix pairs.
    #[inline]
    pub fn pair_states(&self) -> &PairStateMap {
        &self.pair_states
    }

    /// Consume the finder and return its result map.
    pub fn into_pair_states(self) -> PairStateMap {
        self.pair_states
    }

    /// Condition-variable sets of every open treatment → outcome path.
    ///
    /// Ordered by treatment id, then outcome id, then discovery order.
    pub fn open_condition_sets(&self) -> Vec<BTreeSet<NodeId>> {
        self.treatment_outcome_states()
            .flat_map(|state| state.condition_var_sets().iter().cloned())
            .collect()
    }

    /// Treatment → outcome pairs whose every backdoor path is blocked.
    pub fn blocked_pairs(&self) -> Vec<NodePair> {
        self.treatment_outcome_states()
            .filter(|state| state.is_blocked())
            .map(NodePairState::pair)
            .collect()
    }

    fn treatment_outcome_states(&self) -> impl Iterator<Item = &NodePairState> + '_ {
        self.treatments.iter().flat_map(move |&x| {
            self.outcomes
                .iter()
                .filter_map(move |&y| self.pair_states.get(&(x, y)))
        })
    }

    /// Treatment ids, ascending.
    #[inline]
    pub fn treatments(&self) -> &BTreeSet<NodeId> {
        &self.treatments
    }

    /// Outcome ids, ascending.
    #[inline]
    pub fn outcomes(&self) -> &BTreeSet<NodeId> {
        &self.outcomes
    }

    /// Paths and spliced entries counted against `max_paths` so far.
    #[inline]
    pub fn paths_charged(&self) -> usize {
        self.paths_charged
    }
}
