//! Shared plumbing for command implementations: config loading, reading
//! collector output, building the graph, and writing results.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use drift_graph::{
    GitHistory, Graph, GraphBuilder, ImportReport, Interrupt, IngestSummary, UsageReport,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cli::{InputArgs, OutputMode};
use crate::config::{ConfigOverrides, DriftConfig};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Load the configuration for a command.
pub fn load_config(input: &InputArgs, overrides: ConfigOverrides) -> Result<DriftConfig> {
    DriftConfig::load(input.config.as_deref(), overrides)
}

/// Read and parse one collector output file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_path(path)?;
    serde_json::from_str(&content).with_path(path)
}

/// Build the graph from every configured collector output.
///
/// Sources are ingested history, usage, then imports. Missing sources are
/// skipped with a warning; the resulting graph answers queries with empty
/// results for them.
pub fn build_graph(config: &DriftConfig) -> Result<Graph> {
    if !config.has_inputs() {
        warn!("no collector inputs configured; the graph will be empty");
    }

    let interrupt = config
        .deadline_secs
        .map_or_else(Interrupt::none, |secs| Interrupt::after(Duration::from_secs(secs)));
    let mut builder = GraphBuilder::with_interrupt(interrupt);

    let spinner = ui::Spinner::new("Building graph...");
    let start = Instant::now();

    let result = ingest_all(&mut builder, config, &spinner);
    if let Err(err) = result {
        spinner.fail("Graph construction failed");
        return Err(err);
    }

    let graph = builder.build();
    let elapsed = ui::format_duration(start.elapsed());
    spinner.finish(&format!(
        "Built graph with {} nodes and {} edges in {}",
        graph.node_count(),
        graph.edge_count(),
        elapsed
    ));
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed = %elapsed,
        "graph built"
    );
    Ok(graph)
}

fn ingest_all(builder: &mut GraphBuilder, config: &DriftConfig, spinner: &ui::Spinner) -> Result<()> {
    match &config.history {
        Some(path) => {
            spinner.set_message("Ingesting git history...");
            let history: GitHistory = read_json(path)?;
            log_summary("history", path, builder.ingest_history(&history)?);
        }
        None => debug!("no git history input"),
    }

    match &config.usage {
        Some(path) => {
            spinner.set_message("Ingesting usage report...");
            let usage: UsageReport = read_json(path)?;
            log_summary("usage", path, builder.ingest_usage(&usage, Utc::now())?);
        }
        None => debug!("no usage input"),
    }

    match &config.imports {
        Some(path) => {
            spinner.set_message("Ingesting imports...");
            let imports: ImportReport = read_json(path)?;
            log_summary("imports", path, builder.ingest_imports(&imports)?);
        }
        None => debug!("no imports input"),
    }

    Ok(())
}

fn log_summary(source: &str, path: &Path, summary: IngestSummary) {
    debug!(
        source,
        path = %path.display(),
        nodes = summary.nodes_touched,
        edges = summary.edges_touched,
        "ingested"
    );
}

/// Print `value` as pretty JSON in JSON mode, or `text` otherwise.
pub fn emit<T: Serialize>(mode: OutputMode, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputMode::Text => print!("{}", text()),
    }
    Ok(())
}

/// Write `content` to `out`, or to stdout when `out` is `None`.
pub fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_hint(format!("Check that {} is a writable file path", path.display()))?;
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_missing_file() {
        let err = read_json::<UsageReport>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_contract() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("imports.json");
        fs::write(&path, r#"{ "edges": [{ "sourceFile": 1 }] }"#).unwrap();

        let err = read_json::<ImportReport>(&path).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_build_graph_from_files() {
        let temp = TempDir::new().unwrap();
        let usage = temp.path().join("usage.json");
        fs::write(
            &usage,
            r#"{
                "components": [{ "name": "Button", "tests": ["Button.test.tsx"] }],
                "tokens": [{ "name": "color.primary" }]
            }"#,
        )
        .unwrap();

        let config = DriftConfig {
            usage: Some(usage),
            ..DriftConfig::default()
        };
        let graph = build_graph(&config).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_graph_without_inputs_is_empty() {
        let graph = build_graph(&DriftConfig::default()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let out: PathBuf = temp.path().join("out/graph.dot");
        write_output("digraph {}\n", Some(&out)).unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "digraph {}\n");
    }

    #[test]
    fn test_write_output_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_output("{}", Some(&blocker.join("graph.json"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create "));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_write_output_to_directory_has_hint() {
        let temp = TempDir::new().unwrap();
        let err = write_output("{}", Some(temp.path())).unwrap_err();
        assert!(err.to_string().contains("Hint: Check that"));
    }
}
