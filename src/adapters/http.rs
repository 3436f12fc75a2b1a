use crate::core::{ClinicService, Vet, Vets};
use crate::utils::error::{ClinicError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Fetches vets from a JSON endpoint serving either `[...]` or `{"vetList": [...]}`.
pub struct HttpClinicService {
    endpoint: String,
    client: Client,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VetsPayload {
    Envelope(Vets),
    List(Vec<Vet>),
}

impl HttpClinicService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ClinicService for HttpClinicService {
    async fn find_vets(&self) -> Result<Vec<Vet>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(self.endpoint.as_str()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ClinicError::ServiceError {
                message: format!("GET {} returned {}", self.endpoint, status),
            });
        }

        let vets = match response.json::<VetsPayload>().await? {
            VetsPayload::Envelope(vets) => vets.into_vet_list(),
            VetsPayload::List(vets) => vets,
        };
        Ok(vets)
    }
}
