use async_trait::async_trait;
use serde::Serialize;

use crate::external::reference_data::{ClientError, ExportSink};

pub struct ExportsServiceClient {
    client: reqwest::Client,
    base_url: String,
}

// Transport envelope the export endpoint expects.
#[derive(Serialize)]
struct ExportPayload<'a> {
    csv: &'a str,
}

impl ExportsServiceClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ExportSink for ExportsServiceClient {
    async fn submit_csv(&self, csv: &str) -> Result<(), ClientError> {
        let url = format!("{}/investments/export", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&ExportPayload { csv })
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::BadResponse(format!(
                "export endpoint returned {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
