//! Configuration types for backdoor analysis.
//!
//! This module provides [`SearchConfig`], which controls:
//! - memoized reuse of completed node-pair results
//! - the candidate path budget
//! - which hitting-set solver turns open paths into an adjustment set

mod search;

pub use self::search::{
    HittingSetStrategy, SearchConfig, DEFAULT_EXACT_MAX_CANDIDATES, DEFAULT_MAX_PATHS,
    MAX_EXACT_CANDIDATES,
};
