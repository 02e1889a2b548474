//! Diagnostic tracing setup
//!
//! Both front ends own the terminal, so traces go to `piggybank.log` in the
//! data directory instead of stderr. The filter comes from `PIGGYBANK_LOG`
//! and defaults to `warn`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::PiggyPaths;
use crate::error::{PiggyError, PiggyResult};

/// Environment variable holding the trace filter
pub const LOG_ENV: &str = "PIGGYBANK_LOG";

/// Install the global subscriber
pub fn init(paths: &PiggyPaths) -> PiggyResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.trace_file())
        .map_err(|e| PiggyError::Io(format!("Failed to open trace file: {}", e)))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| PiggyError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
