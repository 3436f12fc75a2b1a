pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::AppConfig;

pub use crate::adapters::{CsvClinicService, HttpClinicService, InMemoryClinicService};
pub use crate::core::controller::{VetController, VETS_MODEL_KEY, VET_LIST_VIEW};
pub use crate::core::interpreter::HearingInterpreter;
pub use crate::core::registry::{Candidate, ProducerRegistry};
pub use crate::core::view::{render, to_json, Model};
pub use crate::domain::model::{ModelValue, Specialty, Vet, Vets};
pub use crate::domain::ports::{ClinicService, ModelSink, WordProducer};
pub use crate::utils::error::{ClinicError, Result};
