//! Append-only progress log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::error::EtlError;

/// 4-digit year, abbreviated month name, day, 24-hour clock.
const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Writes one `<timestamp> : <message>` line per call.
///
/// The file is opened in append mode and closed on every call — no
/// buffering, no rotation, no size bound. The log survives across runs.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProgressLog { path: path.into() }
    }

    pub fn append(&self, message: &str) -> Result<(), EtlError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{timestamp} : {message}")?;

        Ok(())
    }
}
