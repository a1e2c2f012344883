pub mod reading;
pub mod user_device_link;

pub use reading::{Reading, TimeRange};
pub use user_device_link::UserDeviceLink;
