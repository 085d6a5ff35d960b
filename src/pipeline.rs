//! The pipeline itself: extract → transform → load → query, with the
//! progress logger invoked between stages.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::EtlConfig;
use crate::csv_sink;
use crate::db;
use crate::extract;
use crate::fetch;
use crate::log::ProgressLog;
use crate::rates::ExchangeRates;
use crate::transform;

/// What a completed run produced.
#[derive(Debug)]
pub struct EtlSummary {
    pub banks_loaded: usize,
}

/// Full run against the configured source URL.
///
/// Strictly sequential; each stage blocks until complete. There is no
/// partial-output cleanup on failure — a failed run may leave the log, the
/// CSV, or the database partially updated.
pub fn run(cfg: &EtlConfig, log: &ProgressLog) -> Result<EtlSummary> {
    log.append("Preliminaries complete. Initiating ETL process")?;

    let page = fetch::fetch_page(&cfg.url).with_context(|| format!("fetching {}", cfg.url))?;

    run_from_page(&page, cfg, log)
}

/// Everything after the fetch. Split out so tests can drive the pipeline
/// from fixture HTML without touching the network.
pub fn run_from_page(page: &str, cfg: &EtlConfig, log: &ProgressLog) -> Result<EtlSummary> {
    let banks = extract::extract_banks(page).context("extracting the banks table")?;
    log.append("Data extraction complete. Initiating Transformation process")?;

    let rates = ExchangeRates::load(&cfg.rates_path)
        .with_context(|| format!("loading exchange rates from {}", cfg.rates_path.display()))?;
    let table = transform::enrich(&banks, &rates)?;
    log.append("Data transformation complete. Initiating Loading process")?;

    csv_sink::write_csv(&cfg.csv_path, &table)
        .with_context(|| format!("writing {}", cfg.csv_path.display()))?;
    log.append("Data saved to CSV file")?;

    let mut conn = Connection::open(&cfg.db_path)
        .with_context(|| format!("opening {}", cfg.db_path.display()))?;
    log.append("SQL Connection initiated")?;

    db::load_to_db(&mut conn, &cfg.table_name, &table)?;
    log.append("Data loaded to Database as a table, Executing queries")?;

    // The three fixed read-only queries, display-only.
    for sql in [
        format!("SELECT * FROM {}", cfg.table_name),
        format!("SELECT AVG(MC_GBP_Billion) FROM {}", cfg.table_name),
        format!("SELECT Name FROM {} LIMIT 5", cfg.table_name),
    ] {
        db::run_query(&conn, &sql)?;
    }
    log.append("Process Complete")?;

    Ok(EtlSummary {
        banks_loaded: table.len(),
    })
}
