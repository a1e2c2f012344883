use anyhow::{Context, Result};
use log::debug;
use rusqlite::params;

use crate::db::{models::UserDeviceLink, Database};

impl Database {
    /// Append one user-device link. Duplicate pairs are stored as-is.
    pub async fn insert_user_device_link(
        &self,
        user_id: &str,
        device_id: &str,
    ) -> Result<UserDeviceLink> {
        let user_id = user_id.to_string();
        let device_id = device_id.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO user_device_links (user_id, device_id) VALUES (?1, ?2)",
                params![user_id, device_id],
            )
            .with_context(|| "failed to insert user device link")?;

            Ok(UserDeviceLink {
                id: conn.last_insert_rowid(),
                user_id,
                device_id,
            })
        })
        .await
    }

    /// Append one link per entry of `device_ids` in a single transaction.
    /// Either every link is committed or none is.
    pub async fn insert_user_device_links(
        &self,
        user_id: &str,
        device_ids: &[String],
    ) -> Result<usize> {
        let user_id = user_id.to_string();
        let device_ids = device_ids.to_vec();
        self.execute(move |conn| {
            let tx = conn.transaction()?;

            {
                let mut stmt = tx.prepare(
                    "INSERT INTO user_device_links (user_id, device_id) VALUES (?1, ?2)",
                )?;
                for device_id in &device_ids {
                    stmt.execute(params![user_id, device_id])
                        .with_context(|| format!("failed to link device {device_id}"))?;
                }
            }

            tx.commit()?;
            debug!("Linked {} device(s) to user {user_id}", device_ids.len());
            Ok(device_ids.len())
        })
        .await
    }

    /// Device ids linked to `user_id` in link order, duplicates included.
    pub async fn device_ids_for_user(&self, user_id: &str) -> Result<Vec<String>> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT device_id
                 FROM user_device_links
                 WHERE user_id = ?1
                 ORDER BY id ASC",
            )?;

            let mut rows = stmt.query(params![user_id])?;
            let mut devices = Vec::new();
            while let Some(row) = rows.next()? {
                devices.push(row.get(0)?);
            }

            Ok(devices)
        })
        .await
    }
}
