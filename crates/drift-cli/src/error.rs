//! Error handling for the drift CLI.
//!
//! `CliError` is what every command returns. Library failures arrive through
//! [`CliError::Graph`]; everything the user can fix (a missing input file, a
//! bad config value) carries a `Hint:` line telling them how.
//!
//! # Example
//!
//! ```rust,no_run
//! use drift_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_report(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod diagnostic;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration errors (bad file, bad value)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Graph construction, query, or export failures
    #[error("Graph error: {0}")]
    Graph(#[from] drift_graph::Error),

    /// A collector output file does not exist
    #[error("Input file not found: {}\n\nHint: Check the --history, --usage and --imports paths (or the matching config fields)", .0.display())]
    InputNotFound(PathBuf),

    /// A collector output file is not valid JSON for its contract
    #[error("Invalid input in {}: {source}\n\nHint: Collector output must be JSON matching the git history, usage or import report format", .path.display())]
    InvalidInput {
        /// File that failed to parse
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<drift_graph::ConstructionError> for CliError {
    fn from(err: drift_graph::ConstructionError) -> Self {
        Self::Graph(err.into())
    }
}

impl From<drift_graph::QueryError> for CliError {
    fn from(err: drift_graph::QueryError) -> Self {
        Self::Graph(err.into())
    }
}

impl From<drift_graph::ExportError> for CliError {
    fn from(err: drift_graph::ExportError) -> Self {
        Self::Graph(err.into())
    }
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a drift.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// The merged configuration could not be extracted
    #[error("Failed to load configuration: {0}\n\nHint: Check drift.config.json / drift.config.toml syntax and DRIFT_* environment variables")]
    Load(#[from] Box<figment::Error>),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Attach the file the operation was working on.
    ///
    /// A not-found I/O error becomes [`CliError::InputNotFound`] and a JSON
    /// error becomes [`CliError::InvalidInput`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;

    /// Add a helpful hint to the error.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::InputNotFound(path.as_ref().to_path_buf())
                }
                CliError::Json(source) => CliError::InvalidInput {
                    path: path.as_ref().to_path_buf(),
                    source,
                },
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
