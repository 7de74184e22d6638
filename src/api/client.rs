//! Power BI Client
//!
//! Main client for the Power BI REST API, combining the bearer token,
//! the HTTP helper and URL construction. Operation groups are reached
//! through accessor methods such as [`PowerBiClient::datasets`].

use super::http::PbiHttpClient;
use crate::error::{Error, Result};
use crate::operations::{Apps, Dashboards, Datasets, Gateways, Groups, Reports, Tiles};
use serde_json::Value;

/// Root of the Power BI REST API for the signed-in organization
pub const DEFAULT_BASE_URL: &str = "https://api.powerbi.com/v1.0/myorg";

/// Main Power BI client
#[derive(Clone)]
pub struct PowerBiClient {
    http: PbiHttpClient,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for PowerBiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PowerBiClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl PowerBiClient {
    /// Create a client against the public API using an already-acquired access token
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root (sovereign clouds, test servers)
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::Config("access token is empty".to_string()));
        }

        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            http: PbiHttpClient::new()?,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to an absolute URL
    pub async fn get(&self, url: &str) -> Result<Value> {
        self.http.get(url, &self.token).await
    }

    /// Make a POST request to an absolute URL
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        self.http.post(url, &self.token, body).await
    }

    /// Make a DELETE request to an absolute URL
    pub async fn delete(&self, url: &str) -> Result<Value> {
        self.http.delete(url, &self.token).await
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    /// Build an API URL for a path below the organization root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build an API URL for a path inside a workspace
    pub fn group_url(&self, group_id: &str, path: &str) -> String {
        self.url(&format!("groups/{}/{}", segment(group_id), path))
    }

    /// Build an API URL that is scoped to a workspace when one is given
    pub fn scoped_url(&self, group_id: Option<&str>, path: &str) -> String {
        match group_id {
            Some(group_id) => self.group_url(group_id, path),
            None => self.url(path),
        }
    }

    // =========================================================================
    // Operation groups
    // =========================================================================

    pub fn datasets(&self) -> Datasets<'_> {
        Datasets::new(self)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(self)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }

    pub fn dashboards(&self) -> Dashboards<'_> {
        Dashboards::new(self)
    }

    pub fn tiles(&self) -> Tiles<'_> {
        Tiles::new(self)
    }

    pub fn gateways(&self) -> Gateways<'_> {
        Gateways::new(self)
    }

    pub fn apps(&self) -> Apps<'_> {
        Apps::new(self)
    }
}

/// Percent-encode a single path segment
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Append OData-style query parameters, skipping unset ones
pub(crate) fn add_query_params(url: &str, params: &[(&str, Option<String>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if query_parts.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query_parts.join("&"))
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    }
}
