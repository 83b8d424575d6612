use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::ALL_CATEGORIES;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub tui: TuiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_autoplay() -> bool {
    true
}

fn default_interval_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CarouselConfig {
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl CarouselConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_secs() -> u64 {
    4
}

fn default_log_file() -> String {
    "skillswap.log".into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl TuiConfig {
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_secs: default_toast_secs(),
            log_file: default_log_file(),
        }
    }
}

fn default_category() -> String {
    ALL_CATEGORIES.into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}
