//! Access to the remote JSON API.
//!
//! Services depend on the [`JsonFetcher`] trait only; [`http::HttpFetcher`]
//! is the production implementation.

use async_trait::async_trait;
use serde_json::Value;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{FetchError, FetchResult};
pub use http::HttpFetcher;

#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues a `GET` to `url` and parses the body as JSON.
    ///
    /// Non-2xx responses are errors.
    async fn fetch_json(&self, url: &str) -> FetchResult<Value>;
}
