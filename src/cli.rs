//! CLI argument parsing and command dispatch for the attendance-core binary.

use std::io::Write;

use anyhow::{Context, Result};
use attendance_core::time_format::{self, TimeTrace};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "attendance-core", about = "Attendance time-format helpers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize time values to HH:MM:SS, one output line per value
    Normalize {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Strictly parse a HH:MM:SS value
    Check {
        value: String,
    },
}

/// Run `command`, writing results to `out`
pub fn run<W: Write>(command: Option<Command>, trace: &dyn TimeTrace, out: &mut W) -> Result<()> {
    match command {
        Some(Command::Normalize { values }) => {
            for value in &values {
                writeln!(out, "{}", time_format::normalize_with(trace, Some(value.as_str())))?;
            }
            info!("Normalized {} value(s)", values.len());
        }
        Some(Command::Check { value }) => {
            let time = time_format::parse_canonical(&value)
                .with_context(|| format!("Rejected time value '{value}'"))?;
            writeln!(out, "{}", time_format::format_canonical(time))?;
        }
        None => {
            info!("No command given, run with --help to list commands");
        }
    }

    Ok(())
}
