//! Currency transformer: USD market caps → GBP/EUR/INR columns.

use crate::error::EtlError;
use crate::extract::BankRecord;
use crate::rates::ExchangeRates;

/// Final table row: the extracted fields plus the three converted columns.
/// Immutable once produced; the sinks only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBankRecord {
    pub name: String,
    pub market_cap_usd: f64,
    pub market_cap_gbp: f64,
    pub market_cap_eur: f64,
    pub market_cap_inr: f64,
}

/// Round to 2 decimal places, half away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Derive the converted columns for every record, preserving order.
///
/// The input is borrowed, never mutated. A missing GBP/EUR/INR rate fails
/// the whole transform before any output row is produced.
pub fn enrich(
    records: &[BankRecord],
    rates: &ExchangeRates,
) -> Result<Vec<EnrichedBankRecord>, EtlError> {
    let gbp = rates.rate("GBP")?;
    let eur = rates.rate("EUR")?;
    let inr = rates.rate("INR")?;

    Ok(records
        .iter()
        .map(|r| EnrichedBankRecord {
            name: r.name.clone(),
            market_cap_usd: r.market_cap_usd,
            market_cap_gbp: round2(r.market_cap_usd * gbp),
            market_cap_eur: round2(r.market_cap_usd * eur),
            market_cap_inr: round2(r.market_cap_usd * inr),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rates() -> ExchangeRates {
        ExchangeRates::from_pairs(&[("GBP", 0.8), ("EUR", 0.93), ("INR", 82.95)])
    }

    fn bank(name: &str, usd: f64) -> BankRecord {
        BankRecord {
            name: name.to_string(),
            market_cap_usd: usd,
        }
    }

    #[test]
    fn hundred_usd_at_0_8_is_exactly_80_gbp() {
        let out = enrich(&[bank("Test Bank", 100.0)], &test_rates()).unwrap();
        assert_eq!(out[0].market_cap_gbp, 80.0);
    }

    #[test]
    fn every_column_matches_the_rounded_product() {
        let records = vec![bank("A", 432.92), bank("B", 231.52), bank("C", 157.91)];
        let out = enrich(&records, &test_rates()).unwrap();

        assert_eq!(out.len(), records.len());
        for (r, e) in records.iter().zip(&out) {
            assert_eq!(e.name, r.name);
            assert_eq!(e.market_cap_usd, r.market_cap_usd);
            assert_eq!(e.market_cap_gbp, round2(r.market_cap_usd * 0.8));
            assert_eq!(e.market_cap_eur, round2(r.market_cap_usd * 0.93));
            assert_eq!(e.market_cap_inr, round2(r.market_cap_usd * 82.95));
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.375), -0.38);
        assert_eq!(round2(1.114999), 1.11);
    }

    #[test]
    fn missing_inr_rate_fails_the_transform() {
        let rates = ExchangeRates::from_pairs(&[("GBP", 0.8), ("EUR", 0.93)]);
        let err = enrich(&[bank("Test Bank", 100.0)], &rates).unwrap_err();
        assert!(matches!(err, EtlError::MissingRate { currency } if currency == "INR"));
    }

    #[test]
    fn input_records_are_not_consumed() {
        let records = vec![bank("A", 1.0)];
        let _ = enrich(&records, &test_rates()).unwrap();
        // still usable afterwards
        assert_eq!(records[0].market_cap_usd, 1.0);
    }
}
