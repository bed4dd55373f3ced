//! Tests for SettingsService and its TTL cache
//!
//! These tests verify the settings store including:
//! - Write-through: a writer immediately reads its own new value
//! - Cached reads serving stale values within the TTL
//! - Typed reads with defaults and loud parse failures

use std::time::Duration;

use chrono::Utc;
use muelle::server::{
    data::setting::SettingRepository,
    error::Error,
    service::setting::{SettingsCache, SettingsService},
};
use muelle_test_utils::TestBuilder;

#[tokio::test]
async fn writer_sees_its_own_value_immediately() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);

    settings
        .set("alert_truck_waiting_time", "6.5", None)
        .await
        .unwrap();

    assert_eq!(
        settings.get("alert_truck_waiting_time").await.unwrap(),
        Some("6.5".to_string())
    );
    assert_eq!(
        settings.get_f64("alert_truck_waiting_time", 4.0).await.unwrap(),
        6.5
    );
}

#[tokio::test]
async fn cached_read_serves_the_old_value_within_the_ttl() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);

    settings.set("alert_berth_utilization", "85", None).await.unwrap();
    assert_eq!(
        settings.get_f64("alert_berth_utilization", 85.0).await.unwrap(),
        85.0
    );

    // Another writer updates the row behind this process's cache.
    SettingRepository::new(&test.db)
        .upsert("alert_berth_utilization", "90", None, Utc::now().naive_utc())
        .await
        .unwrap();

    assert_eq!(
        settings.get_f64("alert_berth_utilization", 85.0).await.unwrap(),
        85.0
    );
}

#[tokio::test]
async fn expired_cache_entry_refetches_from_the_database() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::with_ttl(Duration::ZERO);
    let settings = SettingsService::new(&test.db, &cache);

    settings.set("alert_berth_utilization", "85", None).await.unwrap();

    SettingRepository::new(&test.db)
        .upsert("alert_berth_utilization", "90", None, Utc::now().naive_utc())
        .await
        .unwrap();

    assert_eq!(
        settings.get_f64("alert_berth_utilization", 85.0).await.unwrap(),
        90.0
    );
}

#[tokio::test]
async fn detail_read_carries_the_stored_description() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);

    settings
        .set(
            "alert_berth_utilization",
            "85",
            Some("Umbral de utilización de amarres (%)".to_string()),
        )
        .await
        .unwrap();

    let detail = settings.get_detail("alert_berth_utilization").await.unwrap().unwrap();
    assert_eq!(detail.value, "85");
    assert_eq!(
        detail.description.as_deref(),
        Some("Umbral de utilización de amarres (%)")
    );

    assert_eq!(settings.get_detail("missing").await.unwrap(), None);
}

#[tokio::test]
async fn absent_key_falls_back_to_the_default() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);

    assert_eq!(settings.get("missing").await.unwrap(), None);
    assert_eq!(settings.get_f64("missing", 4.0).await.unwrap(), 4.0);
}

#[tokio::test]
async fn non_numeric_value_is_a_loud_parse_error() {
    let test = TestBuilder::new().with_setting_table().build().await.unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);

    settings
        .set("alert_truck_waiting_time", "cuatro", None)
        .await
        .unwrap();

    let result = settings.get_f64("alert_truck_waiting_time", 4.0).await;
    assert!(matches!(result, Err(Error::ParseError(_))));
}
