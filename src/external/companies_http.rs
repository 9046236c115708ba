use async_trait::async_trait;

use crate::external::reference_data::{ClientError, CompaniesClient};
use crate::models::Company;

pub struct CompaniesServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl CompaniesServiceClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompaniesClient for CompaniesServiceClient {
    async fn fetch_all(&self) -> Result<Option<Vec<Company>>, ClientError> {
        let url = format!("{}/companies", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::BadResponse(format!(
                "companies service returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
