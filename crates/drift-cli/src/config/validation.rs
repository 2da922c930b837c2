use crate::config::DriftConfig;
use crate::error::{CliError, ConfigError, Result};

impl DriftConfig {
    /// Validate values figment cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.min_drift_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "minDriftCount".to_string(),
                value: "0".to_string(),
                hint: "Must be at least 1".to_string(),
            }
            .into());
        }

        if self.deadline_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "deadlineSecs".to_string(),
                value: "0".to_string(),
                hint: "Use a positive number of seconds, or omit it for no limit".to_string(),
            }
            .into());
        }

        for path in [&self.history, &self.usage, &self.imports].into_iter().flatten() {
            if !path.is_file() {
                return Err(CliError::InputNotFound(path.clone()));
            }
        }

        Ok(())
    }
}
