//! Attendance core - domain types and time helpers shared by the attendance app
//!
//! The time normalizer lives in [`time_format`]; records and enumerations the
//! UI exchanges with the backend live in [`types`].

pub mod config;
pub mod defaults;
pub mod error;
pub mod time_format;
pub mod types;

pub use error::{CredentialsError, TimeFormatError, TypeError};
pub use time_format::{normalize, normalize_with, NoTrace, TimeTrace, TracingTrace};
