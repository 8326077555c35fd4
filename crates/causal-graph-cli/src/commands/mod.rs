//! Command handlers.
//!
//! Each handler returns the process exit code: 0 on success, 1 on failure.

pub mod adjust;
pub mod paths;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use causal_graph_backdoor::{BackdoorResult, CausalDag, DagDescription, NodeId};

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// Graph and node selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// DAG description file: {"nodes": [...], "edges": [["A", "B"], ...]}
    #[arg(long, short = 'g')]
    pub graph: PathBuf,

    /// Treatment node labels (comma-separated)
    #[arg(long, short = 't', value_delimiter = ',', required = true)]
    pub treatment: Vec<String>,

    /// Outcome node labels (comma-separated)
    #[arg(long, short = 'o', value_delimiter = ',', required = true)]
    pub outcome: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Re-walk every suffix instead of reusing completed node pairs
    #[arg(long)]
    pub no_reuse: bool,
}

/// Read and validate a DAG description.
pub fn load_dag(path: &Path) -> BackdoorResult<CausalDag> {
    let json = std::fs::read_to_string(path)?;
    DagDescription::from_json(&json)?.into_dag()
}

/// Labels of a node set as a brace list: `{A,B}`.
pub(crate) fn brace_list<'a, I>(dag: &CausalDag, nodes: I) -> String
where
    I: IntoIterator<Item = &'a NodeId>,
{
    format!("{{{}}}", dag.labels_of(nodes).join(","))
}
