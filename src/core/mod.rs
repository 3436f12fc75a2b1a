pub mod controller;
pub mod interpreter;
pub mod producers;
pub mod registry;
pub mod view;

pub use crate::domain::model::{ModelValue, Specialty, Vet, Vets};
pub use crate::domain::ports::{ClinicService, ModelSink, WordProducer};
pub use crate::utils::error::Result;
