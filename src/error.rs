//! Structured error types for the pipeline stages.
//!
//! Every variant here is fatal to the run. The one recoverable condition —
//! a table row whose second cell has no usable name hyperlink — is skipped
//! inside the extractor with a notice and never becomes an `EtlError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("source page returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("no <tbody> section found in the source page")]
    TableNotFound,

    #[error("malformed table row: expected at least 3 cells, found {cells}")]
    MalformedRow { cells: usize },

    #[error("market cap value {text:?} is not a number")]
    BadMarketCap { text: String },

    #[error("no qualifying rows found in the source table")]
    NoRows,

    #[error("exchange rate file has no rate for {currency}")]
    MissingRate { currency: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
