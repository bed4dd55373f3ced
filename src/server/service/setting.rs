//! Settings store: string-valued configuration with typed reads and a
//! short-TTL read cache.
//!
//! Writes go through the database first and then overwrite the cache entry
//! synchronously, so the writer never observes its own stale value; other
//! readers may see the previous value for up to the TTL.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{data::setting::SettingRepository, error::Error};

/// How long a cached read stays fresh.
pub const SETTINGS_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

struct CachedEntry {
    value: String,
    fetched_at: Instant,
}

/// Process-wide settings cache, shared through `AppState`.
#[derive(Clone)]
pub struct SettingsCache {
    entries: Arc<RwLock<HashMap<String, CachedEntry>>>,
    ttl: Duration,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::with_ttl(SETTINGS_CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    fn put(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        entries.insert(
            key.to_string(),
            CachedEntry {
                value: value.to_string(),
                fetched_at: Instant::now(),
            },
        );
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Early-warning thresholds in effect, loaded once per detector run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// Berth utilization alarm threshold, percent.
    pub berth_utilization: f64,
    /// Mean truck waiting time alarm threshold, hours.
    pub truck_waiting_time: f64,
}

impl AlertThresholds {
    pub const BERTH_UTILIZATION_KEY: &'static str = "alert_berth_utilization";
    pub const TRUCK_WAITING_TIME_KEY: &'static str = "alert_truck_waiting_time";

    pub async fn load(settings: &SettingsService<'_>) -> Result<Self, Error> {
        Ok(Self {
            berth_utilization: settings.get_f64(Self::BERTH_UTILIZATION_KEY, 85.0).await?,
            truck_waiting_time: settings.get_f64(Self::TRUCK_WAITING_TIME_KEY, 4.0).await?,
        })
    }
}

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a SettingsCache,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a SettingsCache) -> Self {
        Self { db, cache }
    }

    /// Raw string read, cache first.
    pub async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value));
        }

        let row = SettingRepository::new(self.db).find_by_key(key).await?;

        if let Some(row) = &row {
            self.cache.put(key, &row.value);
        }

        Ok(row.map(|row| row.value))
    }

    /// Full row read for the API surface, description included. Always goes
    /// to the database since the cache only holds values, but warms the
    /// cache on the way out.
    pub async fn get_detail(&self, key: &str) -> Result<Option<entity::setting::Model>, Error> {
        let row = SettingRepository::new(self.db).find_by_key(key).await?;

        if let Some(row) = &row {
            self.cache.put(key, &row.value);
        }

        Ok(row)
    }

    /// Numeric read with a typed fallback default. An unparseable stored
    /// value is a loud error, never a silent coercion.
    pub async fn get_f64(&self, key: &str, default: f64) -> Result<f64, Error> {
        match self.get(key).await? {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::ParseError(format!("setting {} is not numeric: {:?}", key, raw))
            }),
        }
    }

    /// Upserts the setting and overwrites the cache entry before
    /// returning, so a subsequent read in this process sees the new value.
    pub async fn set(
        &self,
        key: &str,
        value: &str,
        description: Option<String>,
    ) -> Result<entity::setting::Model, Error> {
        let model = SettingRepository::new(self.db)
            .upsert(key, value, description, Utc::now().naive_utc())
            .await?;

        self.cache.put(key, value);

        Ok(model)
    }
}
