//! Client configuration

use std::time::Duration;

use log::LevelFilter;

/// Base resource path of the reference task server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/tasks";

/// Settings shared by the API client and the rendering surface
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base resource path `R` of the task store, without trailing slash
    pub api_base_url: String,
    /// How long a notification stays fully visible
    pub notification_timeout: Duration,
    /// Fade-out before a notification is removed
    pub notification_fade: Duration,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notification_timeout: Duration::from_millis(3000),
            notification_fade: Duration::from_millis(300),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }
}
