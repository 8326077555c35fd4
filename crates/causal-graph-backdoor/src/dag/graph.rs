//! Graph trait and the labeled DAG implementation.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::{BackdoorError, BackdoorResult};

/// Canonical node identifier (dense index into the label table).
pub type NodeId = usize;

/// Read-only view of a causal DAG as needed by the backdoor search.
///
/// Implementors must keep `neighbors` free of self-loops and duplicates and
/// symmetric: `b ∈ neighbors(a)` iff `a ∈ neighbors(b)` iff an edge exists
/// in either direction.
pub trait CausalGraph {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// True if a directed edge `from → to` exists.
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    /// Skeleton neighbors of `node`, in ascending id order.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// True if `node` is a valid id.
    fn contains_node(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Human-readable name for error messages and logs.
    fn describe(&self, node: NodeId) -> String {
        format!("#{node}")
    }

    /// Return a node that lies on a directed cycle, if any.
    ///
    /// Kahn's algorithm over the directed edges: nodes never reaching
    /// in-degree zero sit on (or downstream of) a cycle. The smallest such
    /// id is returned so the result is deterministic.
    fn find_cycle(&self) -> Option<NodeId> {
        let n = self.node_count();
        let mut in_degree: Vec<usize> = (0..n)
            .map(|node| {
                self.neighbors(node)
                    .iter()
                    .filter(|&&other| self.has_edge(other, node))
                    .count()
            })
            .collect();

        let mut queue: VecDeque<NodeId> = (0..n).filter(|&node| in_degree[node] == 0).collect();
        let mut removed = 0usize;

        while let Some(node) = queue.pop_front() {
            removed += 1;
            for &child in self.neighbors(node) {
                if !self.has_edge(node, child) {
                    continue;
                }
                in_degree[child] -= 1;
                if in_degree[child] == 0 {
                    queue.push_back(child);
                }
            }
        }

        if removed == n {
            None
        } else {
            (0..n).find(|&node| in_degree[node] > 0)
        }
    }
}

/// Labeled directed acyclic graph.
///
/// Acyclicity is not enforced on every insertion (building from an
/// adjacency matrix would otherwise be quadratic); call [`CausalDag::validate`]
/// or let the backdoor finder reject cyclic input before search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CausalDag {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    children: Vec<BTreeSet<NodeId>>,
    parents: Vec<BTreeSet<NodeId>>,
    skeleton: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl CausalDag {
    /// Create an empty DAG.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a DAG from a node list and labeled edges.
    ///
    /// Every edge endpoint must appear in `nodes`.
    pub fn from_edges<N, E, S>(nodes: N, edges: E) -> BackdoorResult<Self>
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut dag = Self::new();
        for label in nodes {
            dag.add_node(label.as_ref())?;
        }
        for (from, to) in edges {
            dag.add_edge(from.as_ref(), to.as_ref())?;
        }
        Ok(dag)
    }

    /// Register a node.
    ///
    /// # Errors
    /// `DuplicateNode` if the label already exists.
    pub fn add_node(&mut self, label: impl Into<String>) -> BackdoorResult<NodeId> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(BackdoorError::DuplicateNode(label));
        }
        Ok(self.insert_node(label))
    }

    /// Return the id of `label`, registering it if needed.
    pub fn ensure_node(&mut self, label: &str) -> NodeId {
        match self.index.get(label) {
            Some(&id) => id,
            None => self.insert_node(label.to_string()),
        }
    }

    fn insert_node(&mut self, label: String) -> NodeId {
        let id = self.labels.len();
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.children.push(BTreeSet::new());
        self.parents.push(BTreeSet::new());
        self.skeleton.push(Vec::new());
        id
    }

    /// Add a directed edge `from → to` between existing labels.
    ///
    /// Adding an existing edge is a no-op.
    ///
    /// # Errors
    /// `NodeNotFound` for unknown labels, `SelfLoop` when `from == to`.
    pub fn add_edge(&mut self, from: &str, to: &str) -> BackdoorResult<()> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        self.add_edge_by_id(from, to)
    }

    /// Add a directed edge between node ids.
    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId) -> BackdoorResult<()> {
        for node in [from, to] {
            if node >= self.labels.len() {
                return Err(BackdoorError::NodeNotFound(format!("#{node}")));
            }
        }
        if from == to {
            return Err(BackdoorError::SelfLoop(self.labels[from].clone()));
        }
        if !self.children[from].insert(to) {
            return Ok(());
        }
        self.parents[to].insert(from);
        Self::link(&mut self.skeleton[from], to);
        Self::link(&mut self.skeleton[to], from);
        self.edge_count += 1;
        Ok(())
    }

    fn link(neighbors: &mut Vec<NodeId>, node: NodeId) {
        if let Err(pos) = neighbors.binary_search(&node) {
            neighbors.insert(pos, node);
        }
    }

    /// Look up a label.
    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Look up a label, failing with `NodeNotFound`.
    pub fn require(&self, label: &str) -> BackdoorResult<NodeId> {
        self.node_id(label)
            .ok_or_else(|| BackdoorError::NodeNotFound(label.to_string()))
    }

    /// Resolve a list of labels into a node set.
    pub fn resolve<I, S>(&self, labels: I) -> BackdoorResult<BTreeSet<NodeId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.require(label.as_ref()))
            .collect()
    }

    /// Label of a node id.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    /// All labels in id order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels for a sequence of ids, in iteration order. Unknown ids are skipped.
    #[must_use]
    pub fn labels_of<'a, I>(&self, nodes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        nodes
            .into_iter()
            .filter_map(|&node| self.label(node).map(str::to_string))
            .collect()
    }

    /// Direct causes of `node`.
    pub fn parents(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.parents.get(node).into_iter().flatten().copied()
    }

    /// Direct effects of `node`.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children.get(node).into_iter().flatten().copied()
    }

    /// All directed edges as `(from, to)`, ordered by `from` then `to`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check the DAG invariant.
    ///
    /// # Errors
    /// `CycleDetected` naming a node on a directed cycle.
    pub fn validate(&self) -> BackdoorResult<()> {
        match self.find_cycle() {
            Some(node) => Err(BackdoorError::CycleDetected(self.describe(node))),
            None => Ok(()),
        }
    }
}

impl CausalGraph for CausalDag {
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.children
            .get(from)
            .is_some_and(|targets| targets.contains(&to))
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.skeleton.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn describe(&self, node: NodeId) -> String {
        match self.label(node) {
            Some(label) => label.to_string(),
            None => format!("#{node}"),
        }
    }
}
