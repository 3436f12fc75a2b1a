use crate::core::{ClinicService, ModelSink, Vets};
use crate::utils::error::Result;

pub const VET_LIST_VIEW: &str = "vets/vetList";
pub const VETS_MODEL_KEY: &str = "vets";

pub struct VetController<S: ClinicService> {
    service: S,
}

impl<S: ClinicService> VetController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Puts the vets into `model` and returns the view to render them with.
    pub async fn show_vet_list<M: ModelSink + ?Sized>(&self, model: &mut M) -> Result<&'static str> {
        let vets = Vets::new(self.service.find_vets().await?);
        tracing::debug!("Showing {} vets in view {}", vets.vet_list().len(), VET_LIST_VIEW);

        model.put(VETS_MODEL_KEY, vets.into());
        Ok(VET_LIST_VIEW)
    }

    /// Returns the vets as an envelope for JSON responses.
    pub async fn show_resources_vet_list(&self) -> Result<Vets> {
        let vets = Vets::new(self.service.find_vets().await?);
        tracing::debug!("Returning {} vets as a resource", vets.vet_list().len());
        Ok(vets)
    }
}
