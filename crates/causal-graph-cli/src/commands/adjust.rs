//! `adjust` command: adjustment set for the whole treatment/outcome batch.

use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use causal_graph_backdoor::{identify_adjustment_set, BackdoorResult, HittingSetStrategy, SearchConfig};

use super::{brace_list, load_dag, OutputFormat, QueryArgs};

/// Arguments for the adjust command.
#[derive(Args, Debug, Clone)]
pub struct AdjustArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Use the exact (exponential) hitting-set solver
    #[arg(long)]
    pub exact: bool,
}

/// Output of the `adjust` command.
#[derive(Debug, Serialize)]
pub struct AdjustReport {
    pub treatments: Vec<String>,
    pub outcomes: Vec<String>,
    pub strategy: HittingSetStrategy,
    pub adjustment_set: Vec<String>,
    pub open_paths: Vec<Vec<String>>,
    pub blocked_pairs: Vec<(String, String)>,
}

impl AdjustReport {
    fn render_text(&self) -> String {
        let mut out = format!(
            "Adjustment set: {{{}}}\nOpen backdoor paths: {}\n",
            self.adjustment_set.join(","),
            self.open_paths.len()
        );
        for set in &self.open_paths {
            out.push_str(&format!("  {{{}}}\n", set.join(",")));
        }
        for (x, y) in &self.blocked_pairs {
            out.push_str(&format!("Blocked: {x} -> {y}\n"));
        }
        out
    }
}

/// Identify the adjustment set and label the result.
pub fn run_adjust(args: &AdjustArgs, config: SearchConfig) -> BackdoorResult<AdjustReport> {
    let dag = load_dag(&args.query.graph)?;
    let treatments = dag.resolve(&args.query.treatment)?;
    let outcomes = dag.resolve(&args.query.outcome)?;

    let mut config = config;
    if args.exact {
        config = config.hitting_set(HittingSetStrategy::Exact);
    }
    if args.query.no_reuse {
        config = config.reuse_completed_pairs(false);
    }

    let report = identify_adjustment_set(&dag, treatments.iter().copied(), outcomes.iter().copied(), &config)?;
    info!(
        "Adjustment set {} for {} -> {}",
        brace_list(&dag, &report.adjustment_set),
        brace_list(&dag, &treatments),
        brace_list(&dag, &outcomes)
    );

    let label = |node| dag.label(node).unwrap_or_default().to_string();
    Ok(AdjustReport {
        treatments: dag.labels_of(&treatments),
        outcomes: dag.labels_of(&outcomes),
        strategy: config.hitting_set,
        adjustment_set: report.adjustment_labels(&dag),
        open_paths: report.open_path_labels(&dag),
        blocked_pairs: report
            .blocked_pairs
            .iter()
            .map(|&(x, y)| (label(x), label(y)))
            .collect(),
    })
}

/// Execute the `adjust` command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Bad input, uncoverable path, solver limit, or output failure
pub fn handle_adjust(args: AdjustArgs, config: SearchConfig) -> i32 {
    let report = match run_adjust(&args, config) {
        Ok(report) => report,
        Err(e) => {
            error!("adjust failed: {}", e);
            return 1;
        }
    };

    match args.query.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return 1;
            }
        },
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{graph_file, query, CONFOUNDED_JSON};
    use causal_graph_backdoor::BackdoorError;

    fn adjust_args(file: &tempfile::NamedTempFile, x: &[&str], y: &[&str]) -> AdjustArgs {
        AdjustArgs {
            query: query(file, x, y),
            exact: false,
        }
    }

    #[test]
    fn test_confounder_adjustment() {
        let file = graph_file(CONFOUNDED_JSON);
        let report = run_adjust(&adjust_args(&file, &["A"], &["C"]), SearchConfig::default())
            .expect("adjust failed");

        assert_eq!(report.adjustment_set, vec!["U".to_string()]);
        assert_eq!(report.open_paths, vec![vec!["U".to_string()]]);
        assert_eq!(report.strategy, HittingSetStrategy::Greedy);
        assert_eq!(
            report.render_text(),
            "Adjustment set: {U}\nOpen backdoor paths: 1\n  {U}\n"
        );
    }

    #[test]
    fn test_exact_flag_selects_solver() {
        let file = graph_file(CONFOUNDED_JSON);
        let mut args = adjust_args(&file, &["A"], &["C"]);
        args.exact = true;
        let report = run_adjust(&args, SearchConfig::default()).expect("adjust failed");

        assert_eq!(report.strategy, HittingSetStrategy::Exact);
        assert_eq!(report.adjustment_set, vec!["U".to_string()]);
    }

    #[test]
    fn test_blocked_pair_listed() {
        let file = graph_file(
            r#"{"nodes": ["X", "Z", "C", "Y"], "edges": [["Z", "X"], ["Z", "C"], ["Y", "C"]]}"#,
        );
        let report = run_adjust(&adjust_args(&file, &["X"], &["Y"]), SearchConfig::default())
            .expect("adjust failed");

        assert!(report.adjustment_set.is_empty());
        assert_eq!(report.blocked_pairs, vec![("X".to_string(), "Y".to_string())]);
        assert!(report.render_text().ends_with("Blocked: X -> Y\n"));
    }

    #[test]
    fn test_uncoverable_path_fails() {
        let file = graph_file(r#"{"nodes": ["X", "Y"], "edges": [["Y", "X"]]}"#);
        let result = run_adjust(&adjust_args(&file, &["X"], &["Y"]), SearchConfig::default());
        assert!(matches!(result, Err(BackdoorError::UncoverablePath { index: 0 })));
        assert_eq!(handle_adjust(adjust_args(&file, &["X"], &["Y"]), SearchConfig::default()), 1);
    }

    #[test]
    fn test_json_output_shape() {
        let file = graph_file(CONFOUNDED_JSON);
        let report = run_adjust(&adjust_args(&file, &["A"], &["C"]), SearchConfig::default())
            .expect("adjust failed");
        let value = serde_json::to_value(&report).expect("serialize failed");

        assert_eq!(value["adjustment_set"], serde_json::json!(["U"]));
        assert_eq!(value["strategy"], serde_json::json!("greedy"));
        assert_eq!(value["treatments"], serde_json::json!(["A"]));
    }
}
