use crate::adapters::{CsvClinicService, HttpClinicService, InMemoryClinicService};
use crate::core::interpreter::HearingInterpreter;
use crate::core::producers::ProducerProperties;
use crate::core::registry::ProducerRegistry;
use crate::core::{ClinicService, Specialty, Vet};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub hearing: HearingConfig,
    pub clinic: ClinicConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub active_profiles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearingConfig {
    /// Overrides which producer is primary.
    pub primary: Option<String>,
    pub say_word: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicSource {
    #[default]
    Memory,
    Csv,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub source: ClinicSource,
    pub csv_path: Option<String>,
    pub endpoint: Option<String>,
    pub vets: Vec<VetEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetEntry {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClinicError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClinicError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClinicError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Replaces the active profiles, e.g. from `--profiles`.
    pub fn with_profiles(mut self, profiles: Vec<String>) -> Self {
        self.app.active_profiles = profiles;
        self
    }

    pub fn active_profiles(&self) -> &[String] {
        &self.app.active_profiles
    }

    pub fn producer_properties(&self) -> ProducerProperties {
        ProducerProperties {
            say_word: self.hearing.say_word.clone(),
        }
    }

    pub fn producer_registry(&self) -> Result<ProducerRegistry> {
        let registry = ProducerRegistry::standard();
        match &self.hearing.primary {
            Some(primary) => registry.with_primary(primary),
            None => Ok(registry),
        }
    }

    pub fn hearing_interpreter(&self) -> Result<HearingInterpreter> {
        self.producer_registry()?
            .resolve(self.active_profiles(), &self.producer_properties())
    }

    /// Configured vets; specialty ids follow first appearance.
    pub fn vets(&self) -> Vec<Vet> {
        let mut specialty_ids: HashMap<&str, u32> = HashMap::new();
        self.clinic
            .vets
            .iter()
            .map(|entry| {
                let mut vet = Vet::new(entry.id, &entry.first_name, &entry.last_name);
                for name in &entry.specialties {
                    let next_id = specialty_ids.len() as u32 + 1;
                    let id = *specialty_ids.entry(name.as_str()).or_insert(next_id);
                    vet = vet.with_specialty(Specialty {
                        id,
                        name: name.clone(),
                    });
                }
                vet
            })
            .collect()
    }

    pub fn clinic_service(&self) -> Result<Box<dyn ClinicService>> {
        let service: Box<dyn ClinicService> = match self.clinic.source {
            ClinicSource::Memory => Box::new(InMemoryClinicService::new(self.vets())),
            ClinicSource::Csv => {
                let path = validate_required_field("clinic.csv_path", &self.clinic.csv_path)?;
                Box::new(CsvClinicService::new(path))
            }
            ClinicSource::Http => {
                let endpoint = validate_required_field("clinic.endpoint", &self.clinic.endpoint)?;
                Box::new(HttpClinicService::new(endpoint.clone()))
            }
        };
        tracing::debug!("Using {:?} clinic service", self.clinic.source);
        Ok(service)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        for profile in &self.app.active_profiles {
            validate_non_empty_string("app.active_profiles", profile)?;
        }

        if let Some(primary) = &self.hearing.primary {
            validate_non_empty_string("hearing.primary", primary)?;
        }

        match self.clinic.source {
            ClinicSource::Memory => {}
            ClinicSource::Csv => {
                let path = validate_required_field("clinic.csv_path", &self.clinic.csv_path)?;
                validate_path("clinic.csv_path", path)?;
                validate_file_extension("clinic.csv_path", path, &["csv"])?;
            }
            ClinicSource::Http => {
                let endpoint = validate_required_field("clinic.endpoint", &self.clinic.endpoint)?;
                validate_url("clinic.endpoint", endpoint)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[app]
active_profiles = ["component-scan"]

[hearing]
say_word = "YaNNy"

[clinic]
source = "memory"

[[clinic.vets]]
id = 1
first_name = "James"
last_name = "Carter"

[[clinic.vets]]
id = 2
first_name = "Linda"
last_name = "Douglas"
specialties = ["surgery", "dentistry"]

[[clinic.vets]]
id = 3
first_name = "Rafael"
last_name = "Ortega"
specialties = ["surgery"]
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.active_profiles(), ["component-scan".to_string()]);
        assert_eq!(config.clinic.source, ClinicSource::Memory);

        let vets = config.vets();
        assert_eq!(vets.len(), 3);
        assert_eq!(vets[1].specialties[0].id, 1);
        assert_eq!(vets[2].specialties[0].id, 1);
        assert_eq!(vets[1].specialties[1].id, 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.active_profiles().is_empty());
        assert_eq!(config.clinic.source, ClinicSource::Memory);
        assert_eq!(config.hearing_interpreter().unwrap().what_i_heard(), "Laurel");
    }

    #[test]
    fn test_primary_override_and_externalized_profile() {
        let config = AppConfig::from_toml_str("[hearing]\nprimary = \"yanny\"\n").unwrap();
        assert_eq!(config.hearing_interpreter().unwrap().what_i_heard(), "Yanny");

        let config = AppConfig::from_toml_str(SAMPLE)
            .unwrap()
            .with_profiles(vec!["externalized".to_string()]);
        assert_eq!(config.hearing_interpreter().unwrap().what_i_heard(), "YaNNy");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CLINIC_DEMO_TEST_WORD", "Laurel?");
        let config =
            AppConfig::from_toml_str("[hearing]\nsay_word = \"${CLINIC_DEMO_TEST_WORD}\"\n").unwrap();
        assert_eq!(config.hearing.say_word.as_deref(), Some("Laurel?"));

        let config =
            AppConfig::from_toml_str("[hearing]\nsay_word = \"${CLINIC_DEMO_UNSET_VAR}\"\n").unwrap();
        assert_eq!(config.hearing.say_word.as_deref(), Some("${CLINIC_DEMO_UNSET_VAR}"));
    }

    #[test]
    fn test_validate_sources() {
        let http = AppConfig::from_toml_str("[clinic]\nsource = \"http\"\n").unwrap();
        assert!(matches!(
            http.validate(),
            Err(ClinicError::MissingConfigError { .. })
        ));
        assert!(http.clinic_service().is_err());

        let http = AppConfig::from_toml_str(
            "[clinic]\nsource = \"http\"\nendpoint = \"ftp://example.com/vets\"\n",
        )
        .unwrap();
        assert!(http.validate().is_err());

        let csv = AppConfig::from_toml_str("[clinic]\nsource = \"csv\"\ncsv_path = \"vets.txt\"\n")
            .unwrap();
        assert!(csv.validate().is_err());

        let csv = AppConfig::from_toml_str("[clinic]\nsource = \"csv\"\ncsv_path = \"vets.csv\"\n")
            .unwrap();
        assert!(csv.validate().is_ok());
        assert!(csv.clinic_service().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[clinic\nsource = 1"),
            Err(ClinicError::ConfigError { .. })
        ));
        assert!(AppConfig::from_toml_str("[clinic]\nsource = \"ldap\"\n").is_err());
    }
}
