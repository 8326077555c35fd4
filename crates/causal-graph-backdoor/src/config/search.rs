//! Backdoor search and adjustment-set configuration.

use serde::{Deserialize, Serialize};

use crate::error::BackdoorError;

/// Default upper bound on completed candidate paths per finder.
pub const DEFAULT_MAX_PATHS: usize = 1_000_000;

/// Default cap on distinct variables handed to the exact solver.
pub const DEFAULT_EXACT_MAX_CANDIDATES: usize = 20;

/// Hard cap for `exact_max_candidates`; subsets are enumerated as bitmasks.
pub const MAX_EXACT_CANDIDATES: usize = 32;

/// Solver used to turn open-path condition sets into an adjustment set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HittingSetStrategy {
    /// Greedy approximation, within H(n) of the optimum.
    #[default]
    Greedy,
    /// Exhaustive search for a minimum hitting set. Exponential.
    Exact,
}

/// Configuration for [`BackdoorPathFinder`](crate::backdoor::BackdoorPathFinder)
/// and [`identify_adjustment_set`](crate::identify::identify_adjustment_set).
///
/// # Example
/// ```
/// use causal_graph_backdoor::config::{HittingSetStrategy, SearchConfig};
///
/// let config = SearchConfig::default()
///     .max_paths(10_000)
///     .hitting_set(HittingSetStrategy::Exact);
/// assert!(config.validate().is_ok());
/// assert!(config.reuse_completed_pairs);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Splice cached results of completed node pairs instead of re-walking
    /// the same suffix. Disable for an exhaustive (slower) search.
    pub reuse_completed_pairs: bool,

    /// Maximum number of candidate paths (recorded or spliced) before the
    /// search aborts with `PathBudgetExceeded`. None = unlimited.
    pub max_paths: Option<usize>,

    /// Solver for the adjustment set.
    pub hitting_set: HittingSetStrategy,

    /// Distinct-variable limit for the exact solver. Must be in 1..=32.
    pub exact_max_candidates: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reuse_completed_pairs: true,
            max_paths: Some(DEFAULT_MAX_PATHS),
            hitting_set: HittingSetStrategy::Greedy,
            exact_max_candidates: DEFAULT_EXACT_MAX_CANDIDATES,
        }
    }
}

impl SearchConfig {
    /// Builder: enable or disable memoized pair reuse.
    #[must_use]
    pub fn reuse_completed_pairs(mut self, reuse: bool) -> Self {
        self.reuse_completed_pairs = reuse;
        self
    }

    /// Builder: set the candidate path budget.
    #[must_use]
    pub fn max_paths(mut self, max: usize) -> Self {
        self.max_paths = Some(max);
        self
    }

    /// Builder: remove the candidate path budget.
    #[must_use]
    pub fn unlimited_paths(mut self) -> Self {
        self.max_paths = None;
        self
    }

    /// Builder: select the hitting-set solver.
    #[must_use]
    pub fn hitting_set(mut self, strategy: HittingSetStrategy) -> Self {
        self.hitting_set = strategy;
        self
    }

    /// Builder: set the exact solver's variable limit.
    #[must_use]
    pub fn exact_max_candidates(mut self, limit: usize) -> Self {
        self.exact_max_candidates = limit;
        self
    }

    /// Validate configuration parameters.
    ///
    /// # Validation Rules
    /// - `max_paths`, when set, must be > 0
    /// - `exact_max_candidates` must be in 1..=32
    ///
    /// # Errors
    /// Returns `BackdoorError::InvalidConfig` for the FIRST invalid field.
    pub fn validate(&self) -> Result<(), BackdoorError> {
        if self.max_paths == Some(0) {
            return Err(BackdoorError::InvalidConfig(
                "max_paths must be positive when set (got 0)".to_string(),
            ));
        }

        if self.exact_max_candidates == 0 || self.exact_max_candidates > MAX_EXACT_CANDIDATES {
            return Err(BackdoorError::InvalidConfig(format!(
                "exact_max_candidates must be in 1..={}, got {}",
                MAX_EXACT_CANDIDATES, self.exact_max_candidates
            )));
        }

        Ok(())
    }
}
