//! Statistical queries over stored readings.
//!
//! Every call re-reads the matching rows from the store and summarizes the
//! derived values (`x + y + z`). Nothing is cached between calls.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use log::debug;

use crate::{
    db::{ReadingStore, TimeRange},
    directory::Directory,
    error::Result,
    stats::{summarize, Summary},
};

/// Outcome of a single-device analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceAnalysis {
    Stats(Summary),
    NoData,
}

/// Outcome of a per-user analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAnalysis {
    /// The user has no linked devices.
    NoDevices,
    /// Devices are linked but none of them has readings.
    NoData,
    /// Stats keyed by device id; devices without readings are omitted.
    Devices(BTreeMap<String, Summary>),
}

#[derive(Clone)]
pub struct Analyzer {
    store: Arc<dyn ReadingStore>,
    directory: Directory,
}

impl Analyzer {
    pub fn new(store: Arc<dyn ReadingStore>, directory: Directory) -> Self {
        Self { store, directory }
    }

    pub async fn analyze_device(&self, device_id: &str, range: &TimeRange) -> Result<DeviceAnalysis> {
        let values = self.store.derived_values(device_id, range).await?;
        debug!(
            "Analyzing {} value(s) for device {device_id} ({range:?})",
            values.len()
        );

        Ok(match summarize(&values) {
            Ok(summary) => DeviceAnalysis::Stats(summary),
            Err(_) => DeviceAnalysis::NoData,
        })
    }

    /// Stats for every device linked to `user_id`, over all stored readings.
    /// A store failure on any device fails the whole call.
    pub async fn analyze_user(&self, user_id: &str) -> Result<UserAnalysis> {
        let device_ids = self.directory.device_ids_for_user(user_id).await?;
        if device_ids.is_empty() {
            return Ok(UserAnalysis::NoDevices);
        }

        let range = TimeRange::unbounded();
        let mut seen = HashSet::new();
        let mut results = BTreeMap::new();
        for device_id in device_ids {
            // Duplicate links resolve to the same entry.
            if !seen.insert(device_id.clone()) {
                continue;
            }
            if let DeviceAnalysis::Stats(summary) = self.analyze_device(&device_id, &range).await? {
                results.insert(device_id, summary);
            }
        }

        if results.is_empty() {
            Ok(UserAnalysis::NoData)
        } else {
            Ok(UserAnalysis::Devices(results))
        }
    }
}
