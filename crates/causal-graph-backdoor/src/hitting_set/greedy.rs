//! Greedy hitting set.

use std::collections::{BTreeMap, BTreeSet};

use crate::dag::NodeId;

/// Greedy cover. Callers must reject empty members first.
pub(super) fn greedy_hitting_set(sets: &[BTreeSet<NodeId>]) -> BTreeSet<NodeId> {
    let mut uncovered: Vec<&BTreeSet<NodeId>> = sets.iter().collect();
    let mut chosen = BTreeSet::new();

    while !uncovered.is_empty() {
        let mut counts: BTreeMap<NodeId, usize> = BTreeMap::new();
        for set in &uncovered {
            for &var in set.iter() {
                *counts.entry(var).or_insert(0) += 1;
            }
        }

        // Highest count wins; on ties the smaller id compares greater.
        let Some((&var, &count)) = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        else {
            break;
        };

        tracing::trace!(variable = var, covered = count, remaining = uncovered.len(), "greedy pick");
        chosen.insert(var);
        uncovered.retain(|set| !set.contains(&var));
    }

    tracing::debug!(sets = sets.len(), chosen = chosen.len(), "greedy hitting set complete");
    chosen
}
