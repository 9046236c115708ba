use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::models::ReportRow;

const HEADERS: [&str; 6] = ["User", "FirstName", "LastName", "Date", "Holding", "Value"];

/// Serializes report rows to one CSV blob, header line first, row order
/// preserved. Quoting and escaping are the csv crate's defaults.
pub fn encode(rows: &[ReportRow]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(vec![]);

    if rows.is_empty() {
        // serialize() only emits headers with at least one record
        writer
            .write_record(HEADERS)
            .context("Failed to write CSV header")?;
    }
    for row in rows {
        writer
            .serialize(row)
            .context("Failed to serialize report row")?;
    }

    let bytes = writer
        .into_inner()
        .context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(user: &str, holding: &str, value: f64) -> ReportRow {
        ReportRow {
            user: user.into(),
            first_name: "A".into(),
            last_name: "B".into(),
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            holding: holding.into(),
            value,
        }
    }

    #[test]
    fn test_header_line_and_row_order() {
        let csv = encode(&[row("u1", "Acme", 500.0), row("u2", "Globex", 125.0)]).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "User,FirstName,LastName,Date,Holding,Value");
        assert_eq!(lines[1], "u1,A,B,2020-01-01,Acme,500.0");
        assert_eq!(lines[2], "u2,A,B,2020-01-01,Globex,125.0");
    }

    #[test]
    fn test_field_with_separator_is_quoted() {
        let csv = encode(&[row("u1", "Acme, Inc.", 10.0)]).unwrap();

        assert!(csv.contains("\"Acme, Inc.\""));
    }

    #[test]
    fn test_empty_report_still_has_headers() {
        let csv = encode(&[]).unwrap();

        assert_eq!(csv.trim_end(), "User,FirstName,LastName,Date,Holding,Value");
    }
}
