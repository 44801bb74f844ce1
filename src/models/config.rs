//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "JOBS_API_URL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Jobs API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Site-wide search settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Console rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Using API base URL from {}", API_URL_ENV);
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        self.api.base()?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.site.region.trim().is_empty() {
            return Err(AppError::validation("site.region is empty"));
        }
        Ok(())
    }
}

/// Jobs API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the jobs API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Parsed base URL.
    pub fn base(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "api.base_url cannot be used as a base: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Where filtering and sorting happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Fetch unfiltered, apply criteria locally
    #[default]
    Client,
    /// Send criteria as query string, trust the response
    Server,
}

/// Site-wide search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Region slug used in keyword search paths and link labels
    #[serde(default = "defaults::region")]
    pub region: String,

    #[serde(default)]
    pub filter_mode: FilterMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            region: defaults::region(),
            filter_mode: FilterMode::default(),
        }
    }
}

/// Console rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Template for a job card (see `Job::format`)
    #[serde(default = "defaults::job_template")]
    pub job_template: String,

    /// Message shown when a search has no results
    #[serde(default = "defaults::empty_message")]
    pub empty_message: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            job_template: defaults::job_template(),
            empty_message: defaults::empty_message(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "http://localhost:3000".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; jobfinder/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn region() -> String {
        "cambridge".into()
    }
    pub fn job_template() -> String {
        "{title}\n  {company}\n  {location} | {salary} | {contract_type} {hours}\n  {posted}\n  {link}"
            .into()
    }
    pub fn empty_message() -> String {
        "No jobs found matching your criteria.".into()
    }
}
