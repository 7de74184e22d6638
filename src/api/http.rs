//! HTTP utilities for Power BI REST API calls

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Power BI API calls
#[derive(Clone)]
pub struct PbiHttpClient {
    client: Client,
}

impl PbiHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pbi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).bearer_auth(token).send().await?;

        read_json(response).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(&self, url: &str, token: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url).bearer_auth(token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        read_json(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).bearer_auth(token).send().await?;

        read_json(response).await
    }
}

/// Check the status and decode the body. Empty bodies (202/204) become `Value::Null`.
async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = sanitize_for_log(&body);
        tracing::error!("API error: {} - {}", status, message);
        return Err(Error::Api { status, message });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_short_body_unchanged() {
        assert_eq!(sanitize_for_log("{\"error\": 1}"), "{\"error\": 1}");
    }

    #[test]
    fn test_sanitize_truncates_and_strips_newlines() {
        let body = format!("line\n{}", "a".repeat(400));
        let out = sanitize_for_log(&body);
        assert!(out.starts_with("linea"));
        assert!(out.contains("[truncated, 405 bytes total]"));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = sanitize_for_log(&body);
        assert!(out.contains("truncated"));
    }
}
