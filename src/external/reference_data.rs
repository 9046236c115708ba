use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Company, Investment};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the investments service.
///
/// Both fetches return `None` when the service answers 2xx with a null body;
/// the caller decides whether that counts as missing source data.
#[async_trait]
pub trait InvestmentsClient: Send + Sync {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Vec<Investment>>, ClientError>;

    async fn fetch_all(&self) -> Result<Option<Vec<Investment>>, ClientError>;
}

/// Client for the financial-companies service.
#[async_trait]
pub trait CompaniesClient: Send + Sync {
    async fn fetch_all(&self) -> Result<Option<Vec<Company>>, ClientError>;
}

/// Downstream sink that receives the finished CSV report.
/// Submission failure must propagate; the report is never fire-and-forget.
#[async_trait]
pub trait ExportSink: Send + Sync {
    async fn submit_csv(&self, csv: &str) -> Result<(), ClientError>;
}
