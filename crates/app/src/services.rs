//! Application services — one struct per use-case family.

pub mod home_service;
pub mod sensor_service;
