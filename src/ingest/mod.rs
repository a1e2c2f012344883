//! Reading ingestion: validate one incoming sample, stamp it with the
//! server's UTC clock and hand it to the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    db::{format_timestamp, ReadingStore},
    error::{Result, ServiceError},
};

const SAVED_MESSAGE: &str = "saved";

/// Body of an incoming reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingInput {
    pub device_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ReadingInput {
    fn validate(&self) -> Result<()> {
        if self.device_id.is_empty() {
            return Err(ServiceError::Validation(
                "device_id must not be empty".to_string(),
            ));
        }
        for (axis, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !value.is_finite() {
                return Err(ServiceError::Validation(format!(
                    "{axis} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Acknowledgement returned once a reading is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn ReadingStore>,
}

impl Ingestor {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Record `input` at the current UTC time.
    pub async fn ingest(&self, input: ReadingInput) -> Result<IngestReceipt> {
        self.ingest_at(input, Utc::now()).await
    }

    /// Record `input` as received at `now`.
    pub async fn ingest_at(&self, input: ReadingInput, now: DateTime<Utc>) -> Result<IngestReceipt> {
        input.validate()?;

        let reading = self
            .store
            .insert_reading(&input.device_id, input.x, input.y, input.z, now)
            .await?;
        let timestamp = format_timestamp(&reading.timestamp);
        info!(
            "Saved reading {} from device {} (x+y+z = {})",
            reading.id,
            reading.device_id,
            reading.derived_value()
        );

        Ok(IngestReceipt {
            message: SAVED_MESSAGE.to_string(),
            timestamp,
        })
    }
}
