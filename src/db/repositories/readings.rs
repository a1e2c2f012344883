use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::{params, params_from_iter};

use crate::db::{
    helpers::{format_timestamp, parse_datetime},
    models::{Reading, TimeRange},
    Database,
};

impl Database {
    /// Append a reading stamped with `recorded_at` and return the stored row.
    pub async fn insert_reading(
        &self,
        device_id: &str,
        x: f64,
        y: f64,
        z: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Reading> {
        let device_id = device_id.to_string();
        self.execute(move |conn| {
            let timestamp = format_timestamp(&recorded_at);
            conn.execute(
                "INSERT INTO readings (device_id, x, y, z, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![device_id, x, y, z, timestamp],
            )
            .with_context(|| "failed to insert reading")?;

            let id = conn.last_insert_rowid();
            debug!("Stored reading {id} for device {device_id}");

            Ok(Reading {
                id,
                device_id,
                x,
                y,
                z,
                timestamp: parse_datetime(&timestamp, "timestamp")?,
            })
        })
        .await
    }

    /// `x + y + z` for every reading of `device_id` inside `range`, in
    /// insertion order. Bounds are inclusive string comparisons against the
    /// stored timestamp.
    pub async fn derived_values(&self, device_id: &str, range: &TimeRange) -> Result<Vec<f64>> {
        let device_id = device_id.to_string();
        let range = range.clone();
        self.execute(move |conn| {
            let mut query = String::from("SELECT x + y + z FROM readings WHERE device_id = ?");
            let mut bindings = vec![device_id];

            if let Some(start) = range.start {
                query.push_str(" AND timestamp >= ?");
                bindings.push(start);
            }
            if let Some(end) = range.end {
                query.push_str(" AND timestamp <= ?");
                bindings.push(end);
            }
            query.push_str(" ORDER BY id ASC");

            let mut stmt = conn.prepare(&query)?;
            let values = stmt
                .query_map(params_from_iter(bindings.iter()), |row| row.get::<_, f64>(0))?
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| "failed to read derived values")?;

            Ok(values)
        })
        .await
    }

    /// Every device id that has at least one reading, sorted.
    pub async fn distinct_device_ids(&self) -> Result<Vec<String>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT DISTINCT device_id
                 FROM readings
                 ORDER BY device_id ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut devices = Vec::new();
            while let Some(row) = rows.next()? {
                devices.push(row.get(0)?);
            }

            Ok(devices)
        })
        .await
    }
}
