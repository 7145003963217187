//! Mock fetcher for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::fetcher::{FetchResult, JsonFetcher};

mock! {
    pub Fetcher {}

    #[async_trait]
    impl JsonFetcher for Fetcher {
        async fn fetch_json(&self, url: &str) -> FetchResult<Value>;
    }
}
