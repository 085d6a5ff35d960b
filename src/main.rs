use anyhow::Result;

use bankcap::{pipeline, EtlConfig, ProgressLog};

fn main() -> Result<()> {
    let cfg = EtlConfig::default();
    let log = ProgressLog::new(&cfg.log_path);

    let summary = pipeline::run(&cfg, &log)?;

    println!(
        "✓ Loaded {} banks to {} and {} (table {})",
        summary.banks_loaded,
        cfg.csv_path.display(),
        cfg.db_path.display(),
        cfg.table_name,
    );

    Ok(())
}
