//! CSV sink: the final table as a flat file.

use std::path::Path;

use crate::error::EtlError;
use crate::transform::EnrichedBankRecord;

/// Output columns; the empty first label heads the row-index column.
const HEADER: [&str; 6] = [
    "",
    "Name",
    "MC_USD_Billion",
    "MC_GBP_Billion",
    "MC_EUR_Billion",
    "MC_INR_Billion",
];

/// Write the result table to `path`, index ascending from 0 in table order.
/// Any existing file is overwritten without confirmation.
pub fn write_csv(path: &Path, records: &[EnrichedBankRecord]) -> Result<(), EtlError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(HEADER)?;
    for (index, r) in records.iter().enumerate() {
        wtr.write_record(&[
            index.to_string(),
            r.name.clone(),
            r.market_cap_usd.to_string(),
            r.market_cap_gbp.to_string(),
            r.market_cap_eur.to_string(),
            r.market_cap_inr.to_string(),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}
