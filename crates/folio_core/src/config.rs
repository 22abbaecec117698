//! # Configuration Loading
//!
//! Configs are TOML files loaded once at startup. Every field has a
//! default, so an empty document is a valid config.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Range checks run after a config has been parsed.
pub trait Validate {
    /// Returns an error describing the first invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is out of range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Parses and validates a config from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on malformed TOML and
/// [`ConfigError::Invalid`] if validation fails.
pub fn from_toml_str<T>(text: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a config file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
/// errors of [`from_toml_str`].
pub fn load_toml<T>(path: impl AsRef<Path>) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&text)
}

/// Configuration for the frame [`Scheduler`](crate::schedule::Scheduler).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Upper clamp for the delta time handed to behaviours, in seconds.
    pub max_delta_time: f32,
    /// Log frames that exceed the frame budget.
    pub enable_timing_logs: bool,
}

impl SchedulerConfig {
    /// Frame budget in microseconds derived from `target_fps`.
    #[must_use]
    pub fn frame_budget_us(&self) -> u64 {
        1_000_000 / u64::from(self.target_fps.max(1))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_delta_time: 0.1,
            enable_timing_logs: false,
        }
    }
}

impl Validate for SchedulerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be greater than zero".into()));
        }
        if self.max_delta_time.is_nan() || self.max_delta_time <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_delta_time must be positive, got {}",
                self.max_delta_time
            )));
        }
        Ok(())
    }
}
