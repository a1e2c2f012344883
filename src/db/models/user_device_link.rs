use serde::{Deserialize, Serialize};

/// Association of a user with one device. Duplicate pairs are allowed and
/// the device does not need to have any readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeviceLink {
    pub id: i64,
    pub user_id: String,
    pub device_id: String,
}
