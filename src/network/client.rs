//! Fetch client - resolves a target against the configured source and decodes JSON

use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::messages::NetworkResponse;
use crate::models::{FetchError, Source};

/// Concrete place a target resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Url(String),
    File(PathBuf),
}

/// Resolve `target` (e.g. `/jack.json`) against a source
pub fn resolve(source: &Source, target: &str) -> Result<Location, FetchError> {
    let relative = target.trim_start_matches('/');
    if relative.is_empty() {
        return Err(FetchError::Network(format!("Invalid target: {:?}", target)));
    }

    match source {
        Source::Http { base_url } => Ok(Location::Url(format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            relative
        ))),
        Source::Dir { root } => {
            // Only plain path segments; nothing may climb out of the root
            let path = Path::new(relative);
            if !path.components().all(|c| matches!(c, Component::Normal(_))) {
                return Err(FetchError::Network(format!(
                    "Target outside assets directory: {}",
                    target
                )));
            }
            Ok(Location::File(root.join(path)))
        }
    }
}

/// Decode a response body as JSON
pub fn decode(body: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch a target and report the result under `request_id`
pub async fn execute_fetch(
    client: &reqwest::Client,
    source: &Source,
    target: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();

    let result = match resolve(source, target) {
        Ok(Location::Url(url)) => fetch_url(client, &url).await,
        Ok(Location::File(path)) => read_file(&path).await,
        Err(e) => Err(e),
    };
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(value) => NetworkResponse::Success {
            id: request_id,
            value,
            time_ms: elapsed,
        },
        Err(error) => NetworkResponse::Failed {
            id: request_id,
            error,
            time_ms: elapsed,
        },
    }
}

async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<Value, FetchError> {
    let resp = client.get(url).send().await.map_err(|e| {
        let msg = if e.is_timeout() {
            "Request timed out".to_string()
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            format!("Request failed: {}", e)
        };
        FetchError::Network(msg)
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Network(format!("HTTP {}", status.as_u16())));
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| FetchError::Network(format!("Error reading body: {}", e)))?;
    decode(&body)
}

async fn read_file(path: &Path) -> Result<Value, FetchError> {
    let body = tokio::fs::read(path)
        .await
        .map_err(|e| FetchError::Network(format!("{}: {}", path.display(), e)))?;
    decode(&body)
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
