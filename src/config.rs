//! Configuration management

use anyhow::{self, Result};

use crate::defaults::{DEFAULT_LOGS_DIR, DEFAULT_LOG_FILTER};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for rolling log files
    pub logs_dir: String,

    /// `tracing` filter directive
    pub log_filter: String,

    /// Log every raw value passed to the time normalizer
    pub trace_time_inputs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let logs_dir = lookup("LOGS_DIR").unwrap_or_else(|| DEFAULT_LOGS_DIR.to_string());

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let trace_time_inputs = match lookup("TRACE_TIME_INPUTS") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                anyhow::anyhow!("TRACE_TIME_INPUTS must be true/false/1/0 (got '{raw}')")
            })?,
        };

        Ok(Self {
            logs_dir,
            log_filter,
            trace_time_inputs,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
