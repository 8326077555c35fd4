//! Backdoor path search.
//!
//! Enumerates simple paths between treatment and outcome nodes over the
//! DAG skeleton, keeping only *backdoor* paths: the first edge points into
//! the treatment, and no other treatment/outcome node sits in the interior.
//!
//! Explores with an ITERATIVE DFS (explicit frame stack), so deep graphs
//! cannot overflow the call stack.
//!
//! # Blocking rule
//!
//! Two consecutive arrows pointing into the same interior node (a collider)
//! block the path. Conditioning on a collider or its descendants never
//! reopens a path here; this is the simplified rule, not full d-separation.
//!
//! # Memoization
//!
//! Results are kept per ordered node pair in a shared [`PairStateMap`].
//! Every suffix of a recorded path updates its own pair, and a pair whose
//! exploration finished is marked complete. When the search later reaches
//! a completed pair, the cached paths are spliced onto every live prefix
//! instead of walking the suffix again.
//!
//! A completed pair is reused only when the walk enters its source from the
//! same direction and every non-endpoint node that sat below the source
//! during the cached exploration is still on the stack. Cached paths
//! crossing the live stack are dropped. Under those two conditions a splice
//! yields exactly what a fresh walk would, so reuse never changes results.

mod finder;
mod pair_state;
mod path_state;
mod types;


pub use self::finder::BackdoorPathFinder;
pub use self::pair_state::NodePairState;
pub use self::path_state::PathState;
pub use self::types::{Arrow, NodePair, PairStateMap};
