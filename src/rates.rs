//! Static exchange-rate reference table.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::EtlError;

/// One data row of the reference file.
#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,

    #[serde(rename = "Rate")]
    rate: f64,
}

/// Currency code → USD-relative multiplier, loaded once per run from the
/// `Currency,Rate` CSV. Read-only for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn load(path: &Path) -> Result<Self, EtlError> {
        let mut rdr = csv::Reader::from_path(path)?;

        let mut rates = HashMap::new();
        for row in rdr.deserialize() {
            let row: RateRow = row?;
            rates.insert(row.currency, row.rate);
        }

        Ok(ExchangeRates { rates })
    }

    /// Rate for `code`. An absent code is an error, never a default — a
    /// reference file missing a required currency must fail the transform
    /// rather than produce a zeroed column.
    pub fn rate(&self, code: &str) -> Result<f64, EtlError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| EtlError::MissingRate {
                currency: code.to_string(),
            })
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        ExchangeRates {
            rates: pairs
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}
