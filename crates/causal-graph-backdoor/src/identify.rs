//! Adjustment-set identification.
//!
//! Wires the pieces together: backdoor search over every treatment ×
//! outcome pair, collection of the open condition sets, and the configured
//! hitting-set solver.

use std::collections::BTreeSet;

use crate::backdoor::{BackdoorPathFinder, NodePair, PairStateMap};
use crate::config::SearchConfig;
use crate::dag::{CausalDag, CausalGraph, NodeId};
use crate::error::BackdoorResult;
use crate::hitting_set::MinimalHittingSet;

/// Outcome of a successful identification.
#[derive(Debug, Clone)]
pub struct AdjustmentReport {
    /// Variables to condition on. Empty when nothing needs blocking.
    pub adjustment_set: BTreeSet<NodeId>,
    /// Condition-variable set of every open treatment → outcome path.
    pub open_paths: Vec<BTreeSet<NodeId>>,
    /// Treatment → outcome pairs whose backdoor paths are all blocked.
    pub blocked_pairs: Vec<NodePair>,
    /// Full result map, including suffix pairs.
    pub pair_states: PairStateMap,
}

impl AdjustmentReport {
    /// True if at least one open backdoor path was found.
    #[inline]
    pub fn has_open_backdoor_paths(&self) -> bool {
        !self.open_paths.is_empty()
    }

    /// Adjustment set as labels, in id order.
    pub fn adjustment_labels(&self, dag: &CausalDag) -> Vec<String> {
        dag.labels_of(&self.adjustment_set)
    }

    /// Open-path condition sets as labels.
    pub fn open_path_labels(&self, dag: &CausalDag) -> Vec<Vec<String>> {
        self.open_paths.iter().map(|set| dag.labels_of(set)).collect()
    }
}

/// Find an adjustment set closing every backdoor path from `treatments`
/// to `outcomes`.
///
/// # Errors
/// Any precondition error from [`BackdoorPathFinder::new`],
/// `PathBudgetExceeded` from the search, or a solver error
/// (`UncoverablePath`, `ExactSolverLimit`). No partial set is returned.
pub fn identify_adjustment_set<G, X, Y>(
    graph: &G,
    treatments: X,
    outcomes: Y,
    config: &SearchConfig,
) -> BackdoorResult<AdjustmentReport>
where
    G: CausalGraph + ?Sized,
    X: IntoIterator<Item = NodeId>,
    Y: IntoIterator<Item = NodeId>,
{
    let mut finder = BackdoorPathFinder::new(graph, treatments, outcomes, config.clone())?;
    if let Err(err) = finder.get_backdoor_paths() {
        tracing::error!(error = %err, "backdoor search failed");
        return Err(err);
    }

    let open_paths = finder.open_condition_sets();
    let blocked_pairs = finder.blocked_pairs();
    let treatment_count = finder.treatments().len();
    let outcome_count = finder.outcomes().len();

    let adjustment_set = match MinimalHittingSet::new(&open_paths)
        .solve(config.hitting_set, config.exact_max_candidates)
    {
        Ok(set) => set,
        Err(err) => {
            tracing::error!(
                error = %err,
                open_paths = open_paths.len(),
                strategy = ?config.hitting_set,
                "adjustment set solve failed"
            );
            return Err(err);
        }
    };

    tracing::info!(
        treatments = treatment_count,
        outcomes = outcome_count,
        open_paths = open_paths.len(),
        blocked_pairs = blocked_pairs.len(),
        adjustment_size = adjustment_set.len(),
        "adjustment set identified"
    );

    Ok(AdjustmentReport {
        adjustment_set,
        open_paths,
        blocked_pairs,
        pair_states: finder.into_pair_states(),
    })
}

/// [`identify_adjustment_set`] with nodes named by label.
///
/// # Errors
/// `NodeNotFound` for an unknown label, plus everything
/// [`identify_adjustment_set`] can return.
pub fn identify_by_labels<S: AsRef<str>>(
    dag: &CausalDag,
    treatments: &[S],
    outcomes: &[S],
    config: &SearchConfig,
) -> BackdoorResult<AdjustmentReport> {
    let treatments = dag.resolve(treatments)?;
    let outcomes = dag.resolve(outcomes)?;
    identify_adjustment_set(dag, treatments, outcomes, config)
}
