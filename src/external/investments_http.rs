use async_trait::async_trait;

use crate::external::reference_data::{ClientError, InvestmentsClient};
use crate::models::Investment;

pub struct InvestmentsServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl InvestmentsServiceClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Option<Vec<Investment>>, ClientError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::BadResponse(format!(
                "investments service returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl InvestmentsClient for InvestmentsServiceClient {
    // The service keys investments by user and answers with a collection,
    // even for a single-id lookup.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Vec<Investment>>, ClientError> {
        let url = format!("{}/investments/{}", self.base_url, id);
        self.get_json(&url).await
    }

    async fn fetch_all(&self) -> Result<Option<Vec<Investment>>, ClientError> {
        let url = format!("{}/investments", self.base_url);
        self.get_json(&url).await
    }
}
