//! Fixed run configuration.
//!
//! The pipeline exposes no CLI flags or environment surface; these constants
//! are the entire configuration of a run. `EtlConfig` exists so tests and
//! embedders can point the stages at their own paths.

use std::path::PathBuf;

/// Archived snapshot of the largest-banks page. The snapshot never changes,
/// which is what makes the extraction heuristics in `extract` viable at all.
pub const SOURCE_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

/// Reference file with the `Currency,Rate` rows (GBP, EUR, INR).
pub const RATES_PATH: &str = "exchange_rate.csv";

/// Flat-file sink, overwritten each run.
pub const CSV_PATH: &str = "Largest_banks_data.csv";

/// File-backed SQLite store.
pub const DB_PATH: &str = "Banks.db";

/// Table replaced on every run.
pub const TABLE_NAME: &str = "Largest_banks";

/// Append-only progress log, shared across runs.
pub const LOG_PATH: &str = "code_log.txt";

#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub url: String,
    pub rates_path: PathBuf,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
    pub log_path: PathBuf,
}

impl Default for EtlConfig {
    fn default() -> Self {
        EtlConfig {
            url: SOURCE_URL.to_string(),
            rates_path: PathBuf::from(RATES_PATH),
            csv_path: PathBuf::from(CSV_PATH),
            db_path: PathBuf::from(DB_PATH),
            table_name: TABLE_NAME.to_string(),
            log_path: PathBuf::from(LOG_PATH),
        }
    }
}
