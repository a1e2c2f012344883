mod readings;
mod user_devices;
