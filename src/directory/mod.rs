//! Device and user directory.
//!
//! Devices are never created explicitly: a device is known once it has at
//! least one reading. Users are a list of device links.

use std::sync::Arc;

use log::info;

use crate::{db::ReadingStore, error::Result};

#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn ReadingStore>,
}

impl Directory {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Every device that has reported at least one reading.
    pub async fn list_devices(&self) -> Result<Vec<String>> {
        Ok(self.store.distinct_device_ids().await?)
    }

    /// Link every entry of `device_ids` to `user_id`, in order and including
    /// duplicates. The registration commits as a whole or not at all.
    pub async fn register_user(&self, user_id: &str, device_ids: &[String]) -> Result<usize> {
        let count = self
            .store
            .insert_user_device_links(user_id, device_ids)
            .await?;
        info!("Registered {count} device link(s) for user {user_id}");
        Ok(count)
    }

    pub async fn device_ids_for_user(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self.store.device_ids_for_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::db::temp_database;

    #[tokio::test]
    async fn test_list_devices_is_derived_from_readings() {
        let (_dir, db) = temp_database();
        let directory = Directory::new(Arc::new(db.clone()));
        for device in ["d2", "d1", "d1"] {
            db.insert_reading(device, 0.0, 0.0, 0.0, Utc::now()).await.unwrap();
        }
        // A link alone does not make a device visible.
        db.insert_user_device_link("alice", "d3").await.unwrap();

        let devices = directory.list_devices().await.unwrap();

        assert_eq!(devices, vec!["d1", "d2"]);
    }

    #[tokio::test]
    async fn test_register_user_keeps_duplicates() {
        let (_dir, db) = temp_database();
        let directory = Directory::new(Arc::new(db));
        let devices = vec!["a".to_string(), "a".to_string(), "b".to_string()];

        let count = directory.register_user("alice", &devices).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(directory.device_ids_for_user("alice").await.unwrap(), devices);
    }

    #[tokio::test]
    async fn test_register_user_twice_appends() {
        let (_dir, db) = temp_database();
        let directory = Directory::new(Arc::new(db));

        directory.register_user("alice", &["a".to_string()]).await.unwrap();
        directory.register_user("alice", &["b".to_string()]).await.unwrap();

        assert_eq!(
            directory.device_ids_for_user("alice").await.unwrap(),
            vec!["a", "b"]
        );
    }
}
