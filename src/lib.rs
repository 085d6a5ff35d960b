// Largest-banks market-cap ETL - Core Library
// Exposes the pipeline stages for the CLI binary and tests

pub mod config;
pub mod csv_sink;
pub mod db;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod log;
pub mod pipeline;
pub mod rates;
pub mod transform;

// Re-export commonly used types
pub use config::EtlConfig;
pub use error::EtlError;
pub use extract::{extract_banks, BankRecord};
pub use log::ProgressLog;
pub use pipeline::{run, run_from_page, EtlSummary};
pub use rates::ExchangeRates;
pub use transform::{enrich, EnrichedBankRecord};
