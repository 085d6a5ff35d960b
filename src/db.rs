//! Relational sink and the fixed read-only queries (SQLite).

use rusqlite::{params, Connection};

use crate::error::EtlError;
use crate::transform::EnrichedBankRecord;

/// Create-or-replace `table` and insert every record in table order.
///
/// Replace semantics: prior contents are dropped, never appended to, so
/// re-running the sink with the same table leaves the same row count. The
/// drop, create, and inserts ride one transaction.
pub fn load_to_db(
    conn: &mut Connection,
    table: &str,
    records: &[EnrichedBankRecord],
) -> Result<(), EtlError> {
    let tx = conn.transaction()?;

    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS \"{table}\";
         CREATE TABLE \"{table}\" (
             Name TEXT NOT NULL,
             MC_USD_Billion REAL NOT NULL,
             MC_GBP_Billion REAL NOT NULL,
             MC_EUR_Billion REAL NOT NULL,
             MC_INR_Billion REAL NOT NULL
         );"
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{table}\"
                 (Name, MC_USD_Billion, MC_GBP_Billion, MC_EUR_Billion, MC_INR_Billion)
             VALUES (?1, ?2, ?3, ?4, ?5)"
        ))?;
        for r in records {
            stmt.execute(params![
                r.name,
                r.market_cap_usd,
                r.market_cap_gbp,
                r.market_cap_eur,
                r.market_cap_inr,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Run one query and print its text and tabular result to stdout.
///
/// Display-only: no result set is returned to the caller.
pub fn run_query(conn: &Connection, sql: &str) -> Result<(), EtlError> {
    println!("{sql}");

    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    println!("{}", columns.join(" | "));

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut fields = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            fields.push(format_value(row.get_ref(i)?));
        }
        println!("{}", fields.join(" | "));
    }
    println!();

    Ok(())
}

fn format_value(value: rusqlite::types::ValueRef<'_>) -> String {
    use rusqlite::types::ValueRef;
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
