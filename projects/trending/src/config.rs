use thiserror::Error;

use crate::period::{Period, PeriodParseError};

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const ADMIN_SECRET_VAR: &str = "ADMIN_SECRET";
pub const SCRAPE_MODE_VAR: &str = "SCRAPE_MODE";
pub const TRENDING_LANGUAGE_VAR: &str = "TRENDING_LANGUAGE";

pub const DEFAULT_SCRAPE_MODE: &str = "daily";

/// Settings read once at startup. A blank endpoint, secret or language counts
/// as unset; a blank mode does not, and fails in `period()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Option<String>,
    pub admin_secret: Option<String>,
    pub scrape_mode: String,
    pub language: Option<String>,
}

/// Validated destination for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTarget {
    pub endpoint: String,
    pub secret: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MissingEndpoint: BACKEND_URL not set")]
    MissingEndpoint,

    #[error("MissingSecret: ADMIN_SECRET not set")]
    MissingSecret,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            backend_url: read(BACKEND_URL_VAR),
            admin_secret: read(ADMIN_SECRET_VAR),
            scrape_mode: lookup(SCRAPE_MODE_VAR)
                .unwrap_or_else(|| DEFAULT_SCRAPE_MODE.to_string()),
            language: read(TRENDING_LANGUAGE_VAR),
        }
    }

    pub fn period(&self) -> Result<Period, PeriodParseError> {
        self.scrape_mode.parse()
    }

    pub fn submission_target(&self) -> Result<SubmissionTarget, ConfigError> {
        let endpoint = self.backend_url.clone().ok_or(ConfigError::MissingEndpoint)?;
        let secret = self.admin_secret.clone().ok_or(ConfigError::MissingSecret)?;
        Ok(SubmissionTarget { endpoint, secret })
    }
}
