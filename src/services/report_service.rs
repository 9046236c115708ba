use std::collections::HashMap;
use std::str::FromStr;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{Company, Investment, ReportRow};
use crate::services::csv_export_service;
use crate::state::AppState;

/// What to do when a holding references a company id with no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Abort the whole report. No partial report is emitted or exported.
    Fail,
    /// Drop the offending row with a warning and keep going.
    Skip,
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(UnresolvedPolicy::Fail),
            "skip" => Ok(UnresolvedPolicy::Skip),
            other => Err(format!(
                "invalid unresolved-holding policy: {} (expected 'fail' or 'skip')",
                other
            )),
        }
    }
}

/// Flattens every (investment, holding) pair into one report row, in
/// investment order then holding order. Each row carries the owning
/// investment's identity fields, the resolved company name, and
/// `value = investment_percentage * investment_total`.
///
/// Pure over its inputs; the only branching is the unresolved-company case,
/// decided by `policy`.
pub fn build_report(
    investments: &[Investment],
    companies: &[Company],
    policy: UnresolvedPolicy,
) -> Result<Vec<ReportRow>, AppError> {
    let index = company_index(companies);

    let mut rows = Vec::new();
    for inv in investments {
        for holding in &inv.holdings {
            match index.get(holding.id.as_str()) {
                Some(company) => rows.push(ReportRow {
                    user: inv.user_id.clone(),
                    first_name: inv.first_name.clone(),
                    last_name: inv.last_name.clone(),
                    date: inv.date,
                    holding: company.name.clone(),
                    value: holding.investment_percentage * inv.investment_total,
                }),
                None => match policy {
                    UnresolvedPolicy::Fail => {
                        return Err(AppError::UnresolvedReference {
                            holding_id: holding.id.clone(),
                            user_id: inv.user_id.clone(),
                        })
                    }
                    UnresolvedPolicy::Skip => {
                        warn!(
                            "Skipping holding {} of user {}: no matching company",
                            holding.id, inv.user_id
                        );
                    }
                },
            }
        }
    }

    Ok(rows)
}

// First match wins when the reference data carries duplicate company ids.
fn company_index(companies: &[Company]) -> HashMap<&str, &Company> {
    let mut index: HashMap<&str, &Company> = HashMap::with_capacity(companies.len());
    for company in companies {
        index.entry(company.id.as_str()).or_insert(company);
    }
    index
}

/// Runs the full report pipeline: fetch both reference collections
/// concurrently, join, encode as CSV, submit to the export sink.
/// Returns the number of rows exported.
pub async fn generate_and_export(state: &AppState) -> Result<usize, AppError> {
    let (investments, companies) = tokio::try_join!(
        state.investments.fetch_all(),
        state.companies.fetch_all(),
    )?;

    let investments = investments.ok_or(AppError::MissingSourceData)?;
    let companies = companies.ok_or(AppError::MissingSourceData)?;

    let rows = build_report(&investments, &companies, state.unresolved_policy)?;

    let csv = csv_export_service::encode(&rows)
        .map_err(|e| AppError::Encoding(e.to_string()))?;

    state.exports.submit_csv(&csv).await?;
    info!("Exported holdings report with {} rows", rows.len());

    Ok(rows.len())
}
