mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::external::companies_http::CompaniesServiceClient;
use crate::external::exports_http::ExportsServiceClient;
use crate::external::investments_http::InvestmentsServiceClient;
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!(
        "Upstreams: investments={} companies={} exports={}",
        config.investments_service_url,
        config.companies_service_url,
        config.exports_service_url
    );

    let http = reqwest::Client::new();
    let state = AppState {
        investments: Arc::new(InvestmentsServiceClient::new(
            http.clone(),
            &config.investments_service_url,
        )),
        companies: Arc::new(CompaniesServiceClient::new(
            http.clone(),
            &config.companies_service_url,
        )),
        exports: Arc::new(ExportsServiceClient::new(
            http,
            &config.exports_service_url,
        )),
        unresolved_policy: config.unresolved_policy,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Admin backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
