//! Adjustment-set selection as a hitting-set problem.
//!
//! Each open backdoor path contributes one set of interior variables;
//! conditioning on any one of them closes that path. A *hitting set*
//! intersects every such set, so conditioning on it closes them all.
//!
//! Two solvers share the same input rules:
//! - greedy (default): picks the variable covering the most uncovered sets,
//!   within a factor H(n) of optimal
//! - exact: smallest possible set, exponential in the number of distinct
//!   variables and therefore capped
//!
//! An empty input yields the empty set. An empty member means some open
//! path has no interior node at all and cannot be blocked.

mod exact;
mod greedy;


use std::collections::BTreeSet;

use crate::config::HittingSetStrategy;
use crate::dag::NodeId;
use crate::error::{BackdoorError, BackdoorResult};

/// Hitting-set solver over an ordered list of variable sets.
#[derive(Debug, Clone, Copy)]
pub struct MinimalHittingSet<'a> {
    sets: &'a [BTreeSet<NodeId>],
}

impl<'a> MinimalHittingSet<'a> {
    /// Wrap the condition-variable sets to be hit.
    #[must_use]
    pub fn new(sets: &'a [BTreeSet<NodeId>]) -> Self {
        Self { sets }
    }

    /// Greedy hitting set.
    ///
    /// Ties on coverage go to the smallest `NodeId`, so the result is
    /// deterministic.
    ///
    /// # Errors
    /// `UncoverablePath` with the index of the first empty member.
    pub fn find_set(&self) -> BackdoorResult<BTreeSet<NodeId>> {
        self.check_coverable()?;
        Ok(greedy::greedy_hitting_set(self.sets))
    }

    /// Minimum-cardinality hitting set.
    ///
    /// # Errors
    /// - `UncoverablePath` with the index of the first empty member
    /// - `ExactSolverLimit` if more than `limit` distinct variables appear
    pub fn find_exact(&self, limit: usize) -> BackdoorResult<BTreeSet<NodeId>> {
        self.check_coverable()?;
        exact::exact_hitting_set(self.sets, limit)
    }

    /// Dispatch on the configured strategy.
    pub fn solve(&self, strategy: HittingSetStrategy, exact_limit: usize) -> BackdoorResult<BTreeSet<NodeId>> {
        match strategy {
            HittingSetStrategy::Greedy => self.find_set(),
            HittingSetStrategy::Exact => self.find_exact(exact_limit),
        }
    }

    /// Every variable appearing in any set.
    pub fn candidates(&self) -> BTreeSet<NodeId> {
        self.sets.iter().flatten().copied().collect()
    }

    fn check_coverable(&self) -> BackdoorResult<()> {
        match self.sets.iter().position(BTreeSet::is_empty) {
            Some(index) => {
                tracing::debug!(index, "open path has no interior variable");
                Err(BackdoorError::UncoverablePath { index })
            }
            None => Ok(()),
        }
    }
}

/// True if `candidate` intersects every set in `sets`.
pub fn is_hitting_set(sets: &[BTreeSet<NodeId>], candidate: &BTreeSet<NodeId>) -> bool {
    sets.iter().all(|set| !set.is_disjoint(candidate))
}
