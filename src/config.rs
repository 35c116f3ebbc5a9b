use std::time::Duration;

use anyhow::{Context, Result};

/// Default CMS origin, matching a local Strapi development server.
const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Default content staleness window in seconds.
const DEFAULT_REVALIDATE_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS origin without a trailing slash, e.g. `https://cms.example.com`.
    pub base_url: String,

    /// How long fetched content stays fresh before the embedding layer
    /// should re-fetch it. The gateway itself holds no cache.
    pub revalidate_secs: u64,
}

impl CmsConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CMS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let revalidate_secs = match std::env::var("CMS_REVALIDATE_SECS") {
            Ok(raw) => raw
                .parse()
                .context("CMS_REVALIDATE_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_REVALIDATE_SECS,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            revalidate_secs,
        })
    }

    /// Build a config pointing at an explicit origin, keeping the default
    /// revalidation window. Used by tests and embedders that manage their
    /// own configuration source.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

/// Strip trailing slashes so URL joining never produces `//api/...`.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
