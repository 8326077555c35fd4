//! Exact minimum hitting set by subset enumeration.
//!
//! Candidates are mapped to bits of a `u64` in ascending id order. Subsets
//! of each size k are walked with Gosper's hack in increasing numeric order,
//! so the first hit is the colexicographically smallest minimum set.

use std::collections::BTreeSet;

use crate::config::MAX_EXACT_CANDIDATES;
use crate::dag::NodeId;
use crate::error::{BackdoorError, BackdoorResult};

/// Exact cover. Callers must reject empty members first.
pub(super) fn exact_hitting_set(sets: &[BTreeSet<NodeId>], limit: usize) -> BackdoorResult<BTreeSet<NodeId>> {
    let candidates: Vec<NodeId> = sets
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let limit = limit.min(MAX_EXACT_CANDIDATES);
    if candidates.len() > limit {
        return Err(BackdoorError::ExactSolverLimit {
            candidates: candidates.len(),
            limit,
        });
    }
    if sets.is_empty() {
        return Ok(BTreeSet::new());
    }

    let masks: Vec<u64> = sets
        .iter()
        .map(|set| {
            set.iter().fold(0u64, |mask, var| {
                mask | candidates.binary_search(var).map_or(0, |bit| 1u64 << bit)
            })
        })
        .collect();

    let n = candidates.len();
    let end = 1u64 << n;
    for size in 1..=n {
        let mut subset: u64 = (1u64 << size) - 1;
        while subset < end {
            if masks.iter().all(|&mask| mask & subset != 0) {
                tracing::debug!(candidates = n, size, "exact hitting set found");
                return Ok(decode(subset, &candidates));
            }
            subset = next_combination(subset);
        }
    }

    // Every member is non-empty, so all candidates together always hit.
    Ok(candidates.into_iter().collect())
}

/// Next integer with the same number of set bits (Gosper's hack).
#[inline]
fn next_combination(subset: u64) -> u64 {
    let lowest = subset & subset.wrapping_neg();
    let ripple = subset + lowest;
    (((ripple ^ subset) >> 2) / lowest) | ripple
}

fn decode(subset: u64, candidates: &[NodeId]) -> BTreeSet<NodeId> {
    candidates
        .iter()
        .enumerate()
        .filter(|(bit, _)| subset & (1u64 << bit) != 0)
        .map(|(_, &var)| var)
        .collect()
}
