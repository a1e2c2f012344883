use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::{
    models::{Reading, TimeRange, UserDeviceLink},
    Database,
};

/// Persistence seam used by the services. [`Database`] is the production
/// implementation; every method commits before it returns.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    async fn insert_reading(
        &self,
        device_id: &str,
        x: f64,
        y: f64,
        z: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Reading>;

    async fn derived_values(&self, device_id: &str, range: &TimeRange) -> Result<Vec<f64>>;

    async fn distinct_device_ids(&self) -> Result<Vec<String>>;

    async fn insert_user_device_link(&self, user_id: &str, device_id: &str)
        -> Result<UserDeviceLink>;

    /// All-or-nothing variant used for a whole registration.
    async fn insert_user_device_links(&self, user_id: &str, device_ids: &[String])
        -> Result<usize>;

    async fn device_ids_for_user(&self, user_id: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl ReadingStore for Database {
    async fn insert_reading(
        &self,
        device_id: &str,
        x: f64,
        y: f64,
        z: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Reading> {
        Database::insert_reading(self, device_id, x, y, z, recorded_at).await
    }

    async fn derived_values(&self, device_id: &str, range: &TimeRange) -> Result<Vec<f64>> {
        Database::derived_values(self, device_id, range).await
    }

    async fn distinct_device_ids(&self) -> Result<Vec<String>> {
        Database::distinct_device_ids(self).await
    }

    async fn insert_user_device_link(
        &self,
        user_id: &str,
        device_id: &str,
    ) -> Result<UserDeviceLink> {
        Database::insert_user_device_link(self, user_id, device_id).await
    }

    async fn insert_user_device_links(
        &self,
        user_id: &str,
        device_ids: &[String],
    ) -> Result<usize> {
        Database::insert_user_device_links(self, user_id, device_ids).await
    }

    async fn device_ids_for_user(&self, user_id: &str) -> Result<Vec<String>> {
        Database::device_ids_for_user(self, user_id).await
    }
}
