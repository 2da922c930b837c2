//! Drift CLI - build, query and export a design-system drift graph.
//!
//! The CLI reads collector output (git history, usage scans, import graphs)
//! into a [`drift_graph::Graph`] and prints query results or exports.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions
//! - [`commands`] - one module per subcommand, each with an `execute` function
//! - [`config`] - `drift.config.json` / `drift.config.toml`, `DRIFT_*`
//!   environment and CLI flags merged with figment
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing setup
//! - [`ui`] - status lines, spinner and text rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use drift_cli::{config::{ConfigOverrides, DriftConfig}, error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     let config = DriftConfig::load(None, ConfigOverrides::default())?;
//!     println!("repeat offender threshold: {}", config.min_drift_count);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
