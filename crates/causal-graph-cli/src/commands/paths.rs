//! `paths` command: backdoor paths per treatment/outcome pair.

use serde::Serialize;
use tracing::{error, info};

use causal_graph_backdoor::{BackdoorPathFinder, BackdoorResult, SearchConfig};

use super::{load_dag, OutputFormat, QueryArgs};

/// Result for one treatment → outcome pair.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PairReport {
    pub treatment: String,
    pub outcome: String,
    /// None when no backdoor path exists.
    pub blocked: Option<bool>,
    /// Interior variables of each open path.
    pub condition_sets: Vec<Vec<String>>,
}

/// Output of the `paths` command.
#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub pairs: Vec<PairReport>,
    pub paths_charged: usize,
}

impl PathsReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for pair in &self.pairs {
            let status = match pair.blocked {
                None => "no backdoor paths",
                Some(true) => "blocked",
                Some(false) => "open",
            };
            out.push_str(&format!("{} -> {}: {}\n", pair.treatment, pair.outcome, status));
            for set in &pair.condition_sets {
                out.push_str(&format!("  condition on one of: {{{}}}\n", set.join(",")));
            }
        }
        out
    }
}

/// Run the search and collect per-pair results.
pub fn run_paths(args: &QueryArgs, config: SearchConfig) -> BackdoorResult<PathsReport> {
    let dag = load_dag(&args.graph)?;
    let treatments = dag.resolve(&args.treatment)?;
    let outcomes = dag.resolve(&args.outcome)?;
    let reuse = config.reuse_completed_pairs && !args.no_reuse;
    let config = config.reuse_completed_pairs(reuse);

    let mut finder = BackdoorPathFinder::new(&dag, treatments.iter().copied(), outcomes.iter().copied(), config)?;
    finder.get_backdoor_paths()?;

    let mut pairs = Vec::new();
    for &x in &treatments {
        for &y in &outcomes {
            if x == y {
                continue;
            }
            let state = finder.pair_state(x, y);
            pairs.push(PairReport {
                treatment: dag.label(x).unwrap_or_default().to_string(),
                outcome: dag.label(y).unwrap_or_default().to_string(),
                blocked: state.and_then(|s| s.blocked()),
                condition_sets: state
                    .map(|s| s.condition_var_sets().iter().map(|set| dag.labels_of(set)).collect())
                    .unwrap_or_default(),
            });
        }
    }

    info!(
        pairs = pairs.len(),
        open_paths = finder.open_condition_sets().len(),
        blocked_pairs = finder.blocked_pairs().len(),
        "backdoor paths collected"
    );

    Ok(PathsReport {
        pairs,
        paths_charged: finder.paths_charged(),
    })
}

/// Execute the `paths` command.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Bad input, search failure, or output failure
pub fn handle_paths(args: QueryArgs, config: SearchConfig) -> i32 {
    let report = match run_paths(&args, config) {
        Ok(report) => report,
        Err(e) => {
            error!("paths failed: {}", e);
            return 1;
        }
    };

    match args.format {
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

    #[test]
    fn test_confounder_pair_reported() {
        let file = graph_file(CONFOUNDED_JSON);
        let report = run_paths(&query(&file, &["A"], &["C"]), SearchConfig::default()).expect("paths failed");

        assert_eq!(
            report.pairs,
            vec![PairReport {
                treatment: "A".to_string(),
                outcome: "C".to_string(),
                blocked: Some(false),
                condition_sets: vec![vec!["U".to_string()]],
            }]
        );
        assert_eq!(report.paths_charged, 1);
    }

    #[test]
    fn test_pair_without_paths() {
        let file = graph_file(r#"{"nodes": ["A", "B"], "edges": [["A", "B"]]}"#);
        let report = run_paths(&query(&file, &["A"], &["B"]), SearchConfig::default()).expect("paths failed");

        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.pairs[0].blocked, None);
        assert!(report.pairs[0].condition_sets.is_empty());
        assert_eq!(report.render_text(), "A -> B: no backdoor paths\n");
    }

    #[test]
    fn test_text_rendering() {
        let file = graph_file(CONFOUNDED_JSON);
        let report = run_paths(&query(&file, &["A"], &["C"]), SearchConfig::default()).expect("paths failed");
        assert_eq!(report.render_text(), "A -> C: open\n  condition on one of: {U}\n");
    }

    #[test]
    fn test_no_reuse_flag_accepted() {
        let file = graph_file(CONFOUNDED_JSON);
        let mut args = query(&file, &["A"], &["C"]);
        args.no_reuse = true;
        let report = run_paths(&args, SearchConfig::default()).expect("paths failed");
        assert_eq!(report.pairs[0].condition_sets, vec![vec!["U".to_string()]]);
    }

    #[test]
    fn test_unknown_label_fails() {
        let file = graph_file(CONFOUNDED_JSON);
        let result = run_paths(&query(&file, &["A"], &["Z"]), SearchConfig::default());
        assert!(matches!(result, Err(BackdoorError::NodeNotFound(_))));
        assert_eq!(handle_paths(query(&file, &["A"], &["Z"]), SearchConfig::default()), 1);
    }
}
