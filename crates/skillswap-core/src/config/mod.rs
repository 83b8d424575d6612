mod env;
mod types;


pub use types::*;

use std::path::Path;

use anyhow::Context;

use crate::data::category_by_id;
use crate::error::CoreError;

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to sensible defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Config`] for zero intervals or an unknown default category.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.carousel.interval_secs == 0 {
            return Err(CoreError::Config(
                "carousel.interval_secs must be greater than zero".into(),
            ));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(CoreError::Config(
                "tui.tick_rate_ms must be greater than zero".into(),
            ));
        }
        if category_by_id(&self.catalog.default_category).is_none() {
            return Err(CoreError::Config(format!(
                "unknown catalog.default_category: {}",
                self.catalog.default_category
            )));
        }
        Ok(())
    }
}
