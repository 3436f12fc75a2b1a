use crate::core::{ClinicService, Vet};
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct InMemoryClinicService {
    vets: Vec<Vet>,
}

impl InMemoryClinicService {
    pub fn new(vets: Vec<Vet>) -> Self {
        Self { vets }
    }
}

#[async_trait]
impl ClinicService for InMemoryClinicService {
    async fn find_vets(&self) -> Result<Vec<Vet>> {
        tracing::debug!("Returning {} vets from memory", self.vets.len());
        Ok(self.vets.clone())
    }
}
