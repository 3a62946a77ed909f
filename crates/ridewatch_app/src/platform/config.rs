//! Loads `ridewatch.ron`. A missing or broken file falls back to defaults,
//! which leave notifications off.

use std::fs;
use std::path::Path;
use std::time::Duration;

use ridewatch_engine::{FetchSettings, NotifierConfig, RideMarkers};
use ridewatch_logging::{ride_info, ride_warn};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILENAME: &str = "ridewatch.ron";
pub const PASSWORD_ENV: &str = "RIDEWATCH_SMTP_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search URL with a `{date}` placeholder; the built-in route when unset.
    pub search_template: Option<String>,
    pub watch_name: Option<String>,
    pub request_timeout_secs: u64,
    pub markers: RideMarkers,
    pub notifier: NotifierConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_template: None,
            watch_name: None,
            request_timeout_secs: 10,
            markers: RideMarkers::default(),
            notifier: NotifierConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    /// Fill an empty SMTP password from the environment lookup.
    pub fn with_password_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.notifier.password.is_empty() {
            if let Some(password) = lookup(PASSWORD_ENV) {
                self.notifier.password = password;
            }
        }
        self
    }
}

pub(crate) fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            ride_info!("No config at {:?}; using defaults", path);
            return AppConfig::default();
        }
        Err(err) => {
            ride_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str::<AppConfig>(&content) {
        Ok(config) => {
            ride_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            ride_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
