use chrono::NaiveDate;
use serde::Serialize;

/// One flattened output record, one per (investment, holding) pair.
/// The serde renames double as the CSV header row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Holding")]
    pub holding: String,
    #[serde(rename = "Value")]
    pub value: f64,
}
