use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Snapshot of one investor's portfolio as served by the investments service.
// `investment_total` is the base every holding percentage is applied against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub investment_total: f64,
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

// One fractional allocation of an investment's total to a company.
// `id` references a Company in the financial-companies service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub investment_percentage: f64,
}
