use drift_graph::query::DEFAULT_MIN_DRIFT_COUNT;

/// Config files searched for, in order, when --config is absent.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["drift.config.json", "drift.config.toml"];

/// Prefix of environment variables read into the config.
pub const ENV_PREFIX: &str = "DRIFT_";

pub fn default_min_drift_count() -> usize {
    DEFAULT_MIN_DRIFT_COUNT
}
