//! Error types for the library

use thiserror::Error;

/// Strict time parsing failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Value does not have the HH:MM:SS shape
    #[error("time '{0}' is not in HH:MM:SS form")]
    NotCanonical(String),
    /// Shape is right but the clock value is impossible
    #[error("time '{0}' is out of range")]
    OutOfRange(String),
}

/// Enumeration parsing failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Login form field check failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("employee code must not be empty")]
    EmptyEmployeeCode,
    #[error("password must not be empty")]
    EmptyPassword,
}
