//! Application state shared by the view layer.
//!
//! The store is an ordinary owned value. The server creates one instance in
//! [`crate::run`] and hands it to handlers through `web::Data<SharedStore>`;
//! tests build their own.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::domain::locale::Locale;

/// Cache of fetched API payloads keyed by cache key.
pub type DataMap = HashMap<String, Value>;

#[derive(Debug, Default)]
pub struct AppStore {
    locale: Locale,
    data: DataMap,
    generations: HashMap<String, u64>,
}

impl AppStore {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Replaces the whole cache. Callers merge prior entries themselves.
    pub fn set_data(&mut self, data: DataMap) {
        self.data = data;
    }

    /// Starts a new fetch for `key` and returns its generation.
    ///
    /// Only the most recently started fetch for a key may commit its result.
    pub fn begin_fetch(&mut self, key: &str) -> u64 {
        let generation = self.generations.entry(key.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn is_current(&self, key: &str, generation: u64) -> bool {
        self.generations.get(key).copied() == Some(generation)
    }
}

/// [`AppStore`] behind a lock so it can be shared between actix workers.
#[derive(Debug, Default)]
pub struct SharedStore(RwLock<AppStore>);

impl SharedStore {
    pub fn new(store: AppStore) -> Self {
        Self(RwLock::new(store))
    }

    /// Read access. A poisoned lock is recovered since every write leaves the
    /// store in a consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, AppStore> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, AppStore> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}
