//! Fetch-once-and-cache access to remote payloads through the [`SharedStore`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::fetcher::JsonFetcher;
use crate::services::{ServiceError, ServiceResult};
use crate::store::SharedStore;

/// Returns the payload cached under `key`, fetching `url` when absent.
///
/// The payload must deserialize into `T` before it is cached. A cached value
/// of another shape is treated as absent. Failures are
/// returned and nothing is stored, so the next call fetches again. A fetch
/// that completes after a newer fetch for the same key was started does not
/// overwrite the cache.
pub async fn load_cached<T, F>(
    store: &SharedStore,
    fetcher: &F,
    url: &str,
    key: &str,
) -> ServiceResult<T>
where
    T: DeserializeOwned,
    F: JsonFetcher + ?Sized,
{
    let cached = store.read().get(key).cloned();
    if let Some(value) = cached {
        match T::deserialize(&value) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => log::debug!("Cached {key} has an unexpected shape, refetching: {err}"),
        }
    }

    let generation = store.write().begin_fetch(key);
    let value = fetcher.fetch_json(url).await?;
    let parsed = T::deserialize(&value).map_err(|err| ServiceError::Payload(err.to_string()))?;

    let mut guard = store.write();
    if guard.is_current(key, generation) {
        let mut data = guard.data().clone();
        data.insert(key.to_string(), value);
        guard.set_data(data);
    } else {
        log::debug!("Discarding stale result for {key} (generation {generation})");
    }

    Ok(parsed)
}

/// Generic data hook: the cached JSON for `key`, or `None` while the fetch
/// keeps failing. Errors are logged, never surfaced.
pub async fn use_api_data<F>(store: &SharedStore, fetcher: &F, url: &str, key: &str) -> Option<Value>
where
    F: JsonFetcher + ?Sized,
{
    use_api_data_as(store, fetcher, url, key).await
}

/// Typed variant of [`use_api_data`].
pub async fn use_api_data_as<T, F>(
    store: &SharedStore,
    fetcher: &F,
    url: &str,
    key: &str,
) -> Option<T>
where
    T: DeserializeOwned,
    F: JsonFetcher + ?Sized,
{
    match load_cached(store, fetcher, url, key).await {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("Error fetching {key}: {err}");
            None
        }
    }
}
