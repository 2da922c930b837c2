use crate::cli::{InputArgs, OutputMode};
use crate::config::{CONFIG_FILE_NAMES, DriftConfig, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use drift_graph::ExportFormat;
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment keys (after the prefix, lowercased) that map onto config fields.
const ENV_KEYS: [&str; 7] = [
    "history",
    "usage",
    "imports",
    "output",
    "min_drift_count",
    "export_format",
    "deadline_secs",
];

/// Values given on the command line or in `DRIFT_*` variables. Unset fields
/// leave lower layers alone.
///
/// Reads snake_case keys (as the environment provides them) and writes the
/// camelCase keys [`DriftConfig`] expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imports: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_drift_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_format: Option<ExportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Overrides carried by the shared input flags.
    pub fn from_input_args(args: &InputArgs) -> Self {
        Self {
            history: args.history.clone(),
            usage: args.usage.clone(),
            imports: args.imports.clone(),
            output: args.json.then_some(OutputMode::Json),
            deadline_secs: args.deadline_secs,
            ..Self::default()
        }
    }
}

impl DriftConfig {
    /// Load configuration for a command run from the current directory.
    pub fn load(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        Self::load_from(Path::new("."), config_path, overrides)
    }

    /// Load configuration, searching `dir` for a config file when
    /// `config_path` is `None`.
    pub fn load_from(
        dir: &Path,
        config_path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(dir),
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = if path.extension().is_some_and(|ext| ext == "toml") {
                figment.merge(Toml::file(path))
            } else {
                figment.merge(Json::file(path))
            };
        }

        figment = figment.merge(Serialized::defaults(env_overrides()?));

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }
}

/// `DRIFT_MIN_DRIFT_COUNT`, `DRIFT_EXPORT_FORMAT`, ... as overrides.
pub(crate) fn env_overrides() -> Result<ConfigOverrides> {
    let overrides = Figment::from(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
        .extract()
        .map_err(ConfigError::from)?;
    Ok(overrides)
}

/// First of [`CONFIG_FILE_NAMES`] present in `dir`.
pub(crate) fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
