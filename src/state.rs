use std::sync::Arc;

use crate::external::reference_data::{CompaniesClient, ExportSink, InvestmentsClient};
use crate::services::report_service::UnresolvedPolicy;

#[derive(Clone)]
pub struct AppState {
    pub investments: Arc<dyn InvestmentsClient>,
    pub companies: Arc<dyn CompaniesClient>,
    pub exports: Arc<dyn ExportSink>,
    pub unresolved_policy: UnresolvedPolicy,
}
