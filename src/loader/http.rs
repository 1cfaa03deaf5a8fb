//! Download export documents from the repository database API.

use super::cache::ManifestCache;
use super::ManifestSource;
use crate::error::{BranchCompareError, LoadErrorKind, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Settings for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Endpoint the branch identifier is appended to
    pub base_url: String,
    pub timeout: Duration,
    /// Response cache location; `None` disables caching
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl: Duration,
    /// Ignore cached bodies but still refresh them
    pub bypass_cache: bool,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            cache_dir: None,
            cache_ttl: Duration::from_secs(24 * 3600),
            bypass_cache: false,
        }
    }
}

/// Blocking HTTP client for `<base_url>/<branch>`.
pub struct HttpSource {
    config: HttpSourceConfig,
    client: reqwest::blocking::Client,
    cache: Option<ManifestCache>,
}

impl HttpSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("branch-compare/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                BranchCompareError::load("building HTTP client", LoadErrorKind::Network(e.to_string()))
            })?;

        let cache = match &config.cache_dir {
            Some(dir) => Some(ManifestCache::new(dir, config.cache_ttl)?),
            None => None,
        };

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Request URL for `branch`
    #[must_use]
    pub fn url_for(&self, branch: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), branch)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                BranchCompareError::load(format!("requesting {url}"), LoadErrorKind::Network(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BranchCompareError::load(
                format!("requesting {url}"),
                LoadErrorKind::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                },
            ));
        }

        let body = response.bytes().map_err(|e| {
            BranchCompareError::load(format!("reading body of {url}"), LoadErrorKind::Network(e.to_string()))
        })?;
        Ok(body.to_vec())
    }
}

impl ManifestSource for HttpSource {
    fn fetch(&self, branch: &str) -> Result<Vec<u8>> {
        let url = self.url_for(branch);

        if let Some(cache) = &self.cache {
            if !self.config.bypass_cache {
                if let Some(body) = cache.get(&url) {
                    tracing::debug!("Cache hit for {}", url);
                    return Ok(body);
                }
            }
        }

        tracing::info!("Downloading {}", url);
        let body = self.download(&url)?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(&url, &body) {
                tracing::warn!("Could not cache {}: {}", url, e);
            }
        }

        Ok(body)
    }

    fn locate(&self, branch: &str) -> String {
        self.url_for(branch)
    }
}
