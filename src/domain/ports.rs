use crate::domain::model::{ModelValue, Vet};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Lookup service the vet controller delegates to.
#[async_trait]
pub trait ClinicService: Send + Sync {
    async fn find_vets(&self) -> Result<Vec<Vet>>;
}

pub trait WordProducer: Send + Sync {
    fn word(&self) -> String;
}

/// Where controllers put values for the rendering layer.
pub trait ModelSink {
    fn put(&mut self, key: &str, value: ModelValue);
}

#[async_trait]
impl<T: ClinicService + ?Sized> ClinicService for std::sync::Arc<T> {
    async fn find_vets(&self) -> Result<Vec<Vet>> {
        (**self).find_vets().await
    }
}

#[async_trait]
impl<T: ClinicService + ?Sized> ClinicService for Box<T> {
    async fn find_vets(&self) -> Result<Vec<Vet>> {
        (**self).find_vets().await
    }
}
