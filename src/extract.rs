//! Table extractor: archived largest-banks page → bank records.

use crate::error::EtlError;
use crate::html;

/// One row of the source table, before currency enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRecord {
    pub name: String,
    pub market_cap_usd: f64,
}

/// Walk the first `<tbody>` of the page and pull one record per data row,
/// in page order.
///
/// Row rules, tied to this snapshot's markup:
/// - rows with no `<td>` cells are header/spacer rows, skipped silently;
/// - the bank name is the text of the *second* hyperlink in the second cell
///   (the first hyperlink on this page is a footnote or flag-icon anchor);
/// - the market cap is the first text node of the third cell, trailing
///   newline stripped, coerced to `f64`.
///
/// Known limitation: the second-hyperlink heuristic silently depends on one
/// archived page layout. A different layout extracts wrong names or none.
pub fn extract_banks(page: &str) -> Result<Vec<BankRecord>, EtlError> {
    let body = html::first_section(page, "tbody").ok_or(EtlError::TableNotFound)?;

    let mut records = Vec::new();
    for row in html::tag_blocks(body, "tr") {
        let cells: Vec<&str> = html::tag_blocks(row, "td").collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() < 3 {
            return Err(EtlError::MalformedRow { cells: cells.len() });
        }

        let links = html::anchor_texts(cells[1]);
        let name = match links.get(1) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => {
                eprintln!(
                    "skipping row without a name link: {:?}",
                    html::clean_text(cells[1])
                );
                continue;
            }
        };

        let text = html::leading_text(cells[2]).trim_end_matches('\n');
        let market_cap_usd: f64 = text
            .trim()
            .parse()
            .map_err(|_| EtlError::BadMarketCap {
                text: text.to_string(),
            })?;

        records.push(BankRecord {
            name,
            market_cap_usd,
        });
    }

    if records.is_empty() {
        return Err(EtlError::NoRows);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><body>
<table class="wikitable sortable">
<tbody>
<tr><th>Rank</th><th>Bank name</th><th>Market cap<br>(US$ billion)</th></tr>
<tr>
<td>1</td>
<td><a href="#cite_note-1"><img alt="flag"></a><a href="/wiki/JPMorgan_Chase">JPMorgan Chase</a></td>
<td>432.92
</td></tr>
<tr>
<td>2</td>
<td><a href="#cite_note-2">[a]</a><a href="/wiki/Bank_of_America">Bank of America</a></td>
<td>231.52
</td></tr>
<tr>
<td>3</td>
<td>Defunct Bank (no link)</td>
<td>204.56
</td></tr>
<tr>
<td>4</td>
<td><a href="#cite_note-3">[b]</a><a href="/wiki/HDFC_Bank">HDFC Bank</a></td>
<td>157.91
</td></tr>
</tbody>
</table>
</body></html>"##;

    #[test]
    fn extracts_qualifying_rows_in_page_order() {
        let records = extract_banks(PAGE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "JPMorgan Chase");
        assert_eq!(records[1].name, "Bank of America");
        assert_eq!(records[2].name, "HDFC Bank");
        assert_eq!(records[0].market_cap_usd, 432.92);
        assert_eq!(records[2].market_cap_usd, 157.91);
        for r in &records {
            assert!(!r.name.is_empty());
            assert!(r.market_cap_usd.is_finite() && r.market_cap_usd >= 0.0);
        }
    }

    #[test]
    fn row_without_name_link_is_skipped_not_fatal() {
        // "Defunct Bank" has zero hyperlinks in its second cell; the other
        // three rows must still come through.
        let records = extract_banks(PAGE).unwrap();
        assert!(records.iter().all(|r| r.name != "Defunct Bank (no link)"));
    }

    #[test]
    fn missing_tbody_is_fatal() {
        let err = extract_banks("<html><table></table></html>").unwrap_err();
        assert!(matches!(err, EtlError::TableNotFound));
    }

    #[test]
    fn table_with_only_header_rows_is_fatal() {
        let page = "<tbody><tr><th>Rank</th><th>Name</th></tr></tbody>";
        let err = extract_banks(page).unwrap_err();
        assert!(matches!(err, EtlError::NoRows));
    }

    #[test]
    fn short_data_row_is_fatal() {
        let page = "<tbody><tr><td>1</td><td><a>x</a><a>Bank</a></td></tr></tbody>";
        let err = extract_banks(page).unwrap_err();
        assert!(matches!(err, EtlError::MalformedRow { cells: 2 }));
    }

    #[test]
    fn unparseable_market_cap_is_fatal() {
        let page = concat!(
            "<tbody><tr>",
            "<td>1</td>",
            "<td><a>[a]</a><a>Some Bank</a></td>",
            "<td>n/a\n</td>",
            "</tr></tbody>"
        );
        let err = extract_banks(page).unwrap_err();
        assert!(matches!(err, EtlError::BadMarketCap { .. }));
    }
}
