//! Base-URL configuration for the assessment client.
//!
//! Resolution is fixed when the client is built: an explicit override wins,
//! then a loopback page host selects the local development service, and
//! everything else talks to production.

use std::{collections::HashMap, fs, path::Path};

use tracing::{debug, warn};

pub const PRODUCTION_BASE_URL: &str =
    "http://neurodiver-job-ALB-298737091.us-east-1.elb.amazonaws.com";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "wayfinder.toml";

const LOOPBACK_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "[::1]"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Override,
    Loopback,
    Production,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    /// Injected base URL; takes precedence over host detection.
    pub api_base_url: Option<String>,
    /// Host the page is served from.
    pub page_host: Option<String>,
}

impl ClientSettings {
    pub fn with_override(mut self, api_base_url: Option<String>) -> Self {
        if api_base_url.is_some() {
            self.api_base_url = api_base_url;
        }
        self
    }

    pub fn with_page_host(mut self, page_host: Option<String>) -> Self {
        if page_host.is_some() {
            self.page_host = page_host;
        }
        self
    }

    pub fn base_url_source(&self) -> BaseUrlSource {
        if self.override_url().is_some() {
            BaseUrlSource::Override
        } else if self.page_host.as_deref().is_some_and(is_loopback_host) {
            BaseUrlSource::Loopback
        } else {
            BaseUrlSource::Production
        }
    }

    pub fn resolve_base_url(&self) -> String {
        let source = self.base_url_source();
        let url = match source {
            BaseUrlSource::Override => self.override_url().unwrap_or(PRODUCTION_BASE_URL),
            BaseUrlSource::Loopback => DEVELOPMENT_BASE_URL,
            BaseUrlSource::Production => PRODUCTION_BASE_URL,
        };
        if source == BaseUrlSource::Loopback {
            debug!("running in local development mode");
        }
        url.trim_end_matches('/').to_string()
    }

    fn override_url(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    LOOPBACK_HOSTS.contains(&host.as_str())
}

/// Defaults, then `wayfinder.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    let mut settings = load_settings_file(Path::new(SETTINGS_FILE));
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub fn load_settings_file(path: &Path) -> ClientSettings {
    let mut settings = ClientSettings::default();

    let Ok(raw) = fs::read_to_string(path) else {
        return settings;
    };
    match toml::from_str::<HashMap<String, String>>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = Some(v.clone());
            }
            if let Some(v) = file_cfg.get("page_host") {
                settings.page_host = Some(v.clone());
            }
        }
        Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable settings file"),
    }

    settings
}

pub fn apply_env(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("WAYFINDER_API_URL") {
        settings.api_base_url = Some(v);
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = Some(v);
    }
    if let Some(v) = lookup("WAYFINDER_PAGE_HOST") {
        settings.page_host = Some(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
