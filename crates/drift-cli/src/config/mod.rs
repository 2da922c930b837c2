//! Configuration for drift with multi-source loading.
//!
//! Priority: CLI > `DRIFT_*` environment > config file > defaults

mod defaults;
mod loading;
mod validation;

use drift_graph::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::cli::OutputMode;
pub use defaults::*;
pub use loading::ConfigOverrides;

/// Drift configuration, loaded from drift.config.json / drift.config.toml,
/// the environment, and CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DriftConfig {
    /// Git history collector output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<PathBuf>,

    /// Usage scanner output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<PathBuf>,

    /// Import collector output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<PathBuf>,

    /// Text or JSON results
    #[serde(default)]
    pub output: OutputMode,

    /// Repeat-offender threshold
    #[serde(default = "default_min_drift_count")]
    pub min_drift_count: usize,

    /// Format used by `drift export` when --format is absent
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Construction budget in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_secs: Option<u64>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            history: None,
            usage: None,
            imports: None,
            output: OutputMode::Text,
            min_drift_count: default_min_drift_count(),
            export_format: ExportFormat::Json,
            deadline_secs: None,
        }
    }
}

impl DriftConfig {
    /// Whether any collector input is configured.
    pub fn has_inputs(&self) -> bool {
        self.history.is_some() || self.usage.is_some() || self.imports.is_some()
    }
}
