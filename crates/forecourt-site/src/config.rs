// SPDX-License-Identifier: Apache-2.0

use std::env;

pub const ENV_SITE_ADDR: &str = "FORECOURT_SITE_ADDR";
pub const ENV_DATA_BASE_URL: &str = "FORECOURT_DATA_BASE_URL";

/// Server configuration. A missing data base URL is not an error: the site
/// then serves the bundled dataset and default profile on every request,
/// which is exactly the fallback path with the fetch skipped.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub data_base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            data_base_url: None,
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var(ENV_SITE_ADDR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            data_base_url: env::var(ENV_DATA_BASE_URL)
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.trim().is_empty() {
            return Err("bind address must not be empty".to_string());
        }
        if let Some(base) = &self.data_base_url {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(format!("data base URL must be http(s): {base}"));
            }
        }
        Ok(())
    }
}
