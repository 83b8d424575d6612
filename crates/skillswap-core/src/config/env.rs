use super::Config;

impl Config {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SKILLSWAP_CAROUSEL_AUTOPLAY") {
            match v.parse::<bool>() {
                Ok(enabled) => self.carousel.autoplay = enabled,
                Err(_) => tracing::warn!("ignoring invalid SKILLSWAP_CAROUSEL_AUTOPLAY value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("SKILLSWAP_CAROUSEL_INTERVAL_SECS") {
            match v.parse::<u64>() {
                Ok(secs) => self.carousel.interval_secs = secs,
                Err(_) => {
                    tracing::warn!("ignoring invalid SKILLSWAP_CAROUSEL_INTERVAL_SECS value: {v}");
                }
            }
        }
        if let Ok(v) = std::env::var("SKILLSWAP_TUI_TICK_RATE_MS")
            && let Ok(ms) = v.parse::<u64>()
        {
            self.tui.tick_rate_ms = ms;
        }
        if let Ok(v) = std::env::var("SKILLSWAP_TUI_TOAST_SECS")
            && let Ok(secs) = v.parse::<u64>()
        {
            self.tui.toast_secs = secs;
        }
        if let Ok(v) = std::env::var("SKILLSWAP_LOG_FILE") {
            self.tui.log_file = v;
        }
        if let Ok(v) = std::env::var("SKILLSWAP_CATALOG_DEFAULT_CATEGORY") {
            let v = v.trim().to_lowercase();
            if !v.is_empty() {
                self.catalog.default_category = v;
            }
        }
    }
}
