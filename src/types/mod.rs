//! Core type definitions for the sign-up demo

mod log_level;
/// Profile records and the enums they carry.
pub mod profile;

pub use log_level::LogLevel;
pub use profile::{AccessFlags, AccessLevel, Gender, Intention, Orientation, UserRecord};
