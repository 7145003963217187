use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::fetcher::{FetchError, FetchResult, JsonFetcher};

/// [`JsonFetcher`] backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Builds the client. Without `timeout` the transport defaults apply.
    pub fn new(timeout: Option<Duration>) -> FetchResult<Self> {
        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> FetchResult<Value> {
        log::debug!("GET {url}");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned {status}");
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
