//! Verdict for a single simple path.

use std::collections::BTreeSet;
use std::fmt;

use crate::dag::NodeId;

/// Blocking verdict and candidate conditioning variables for one path.
///
/// When the path is open, conditioning on any one of its interior nodes
/// closes it. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    blocked: bool,
    condition_vars: BTreeSet<NodeId>,
}

impl PathState {
    /// Record the verdict for a fully traversed path `(n0 … nk)`.
    ///
    /// Open paths keep `n1 … n(k-1)`; blocked paths keep nothing.
    #[must_use]
    pub fn from_path(path: &[NodeId], blocked: bool) -> Self {
        let condition_vars = if blocked || path.len() < 3 {
            BTreeSet::new()
        } else {
            path[1..path.len() - 1].iter().copied().collect()
        };
        Self {
            blocked,
            condition_vars,
        }
    }

    /// True if graph structure already blocks the path.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Interior nodes of an open path; empty for blocked paths.
    #[inline]
    pub fn condition_vars(&self) -> &BTreeSet<NodeId> {
        &self.condition_vars
    }
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Blocked: {}", self.blocked)?;
        if !self.blocked {
            let vars: Vec<String> = self.condition_vars.iter().map(ToString::to_string).collect();
            writeln!(f, "To block path, condition on: {}", vars.join(","))?;
        }
        Ok(())
    }
}
