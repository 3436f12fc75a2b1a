//! Explicit registry of word producers, resolved once at startup.
//!
//! A candidate may be scoped to profile expressions (`"yanny"`, `"!yanny"`).
//! When an active profile enables scoped candidates they are the only ones
//! considered; otherwise every visible candidate is, and a tie is broken by the
//! candidate marked primary.

use crate::core::interpreter::HearingInterpreter;
use crate::core::producers::{
    LaurelWordProducer, ProducerProperties, PropertiesWordProducer, YannyWordProducer,
};
use crate::core::WordProducer;
use crate::utils::error::{ClinicError, Result};

pub const EXTERNALIZED_PROFILE: &str = "externalized";

pub type ProducerFactory =
    Box<dyn Fn(&ProducerProperties) -> Result<Box<dyn WordProducer>> + Send + Sync>;

pub struct Candidate {
    name: String,
    profiles: Vec<String>,
    primary: bool,
    factory: ProducerFactory,
}

impl Candidate {
    pub fn new<F>(name: &str, factory: F) -> Self
    where
        F: Fn(&ProducerProperties) -> Result<Box<dyn WordProducer>> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            profiles: Vec::new(),
            primary: false,
            factory: Box::new(factory),
        }
    }

    pub fn profiles(mut self, profiles: &[&str]) -> Self {
        self.profiles = profiles.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    fn is_visible(&self, active: &[String]) -> bool {
        if self.profiles.is_empty() {
            return true;
        }
        self.profiles.iter().any(|expr| match expr.strip_prefix('!') {
            Some(profile) => !active.iter().any(|a| a == profile),
            None => active.iter().any(|a| a == expr),
        })
    }

    /// True when an active profile names this candidate directly.
    fn is_enabled_by_profile(&self, active: &[String]) -> bool {
        self.profiles
            .iter()
            .filter(|expr| !expr.starts_with('!'))
            .any(|expr| active.iter().any(|a| a == expr))
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("profiles", &self.profiles)
            .field("primary", &self.primary)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ProducerRegistry {
    candidates: Vec<Candidate>,
}

impl ProducerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `laurel` (primary), `yanny`, and `properties` behind the `externalized` profile.
    pub fn standard() -> Self {
        Self {
            candidates: vec![
                Candidate::new("laurel", |_| Ok(Box::new(LaurelWordProducer))).primary(),
                Candidate::new("yanny", |_| Ok(Box::new(YannyWordProducer))),
                Candidate::new("properties", |properties| {
                    Ok(Box::new(PropertiesWordProducer::from_properties(properties)?))
                })
                .profiles(&[EXTERNALIZED_PROFILE]),
            ],
        }
    }

    pub fn register(mut self, candidate: Candidate) -> Result<Self> {
        if self.candidates.iter().any(|c| c.name == candidate.name) {
            return Err(ClinicError::ConfigError {
                message: format!("word producer '{}' is already registered", candidate.name),
            });
        }
        self.candidates.push(candidate);
        Ok(self)
    }

    /// Makes `name` the only primary candidate.
    pub fn with_primary(mut self, name: &str) -> Result<Self> {
        if !self.candidates.iter().any(|c| c.name == name) {
            return Err(ClinicError::InvalidConfigValueError {
                field: "hearing.primary".to_string(),
                value: name.to_string(),
                reason: format!("Known producers: {}", self.candidate_names().join(", ")),
            });
        }
        for candidate in &mut self.candidates {
            candidate.primary = candidate.name == name;
        }
        Ok(self)
    }

    pub fn candidate_names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn select(&self, active_profiles: &[String]) -> Result<&Candidate> {
        let visible: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| c.is_visible(active_profiles))
            .collect();

        let enabled: Vec<&Candidate> = visible
            .iter()
            .copied()
            .filter(|c| c.is_enabled_by_profile(active_profiles))
            .collect();

        let pool = if enabled.is_empty() { visible } else { enabled };
        tracing::debug!(
            "Word producer candidates for profiles {:?}: {:?}",
            active_profiles,
            pool.iter().map(|c| c.name()).collect::<Vec<_>>()
        );

        match pool.as_slice() {
            [] => Err(ClinicError::NoCandidate {
                profiles: active_profiles.to_vec(),
            }),
            [only] => Ok(*only),
            several => {
                let primaries: Vec<&&Candidate> = several.iter().filter(|c| c.primary).collect();
                match primaries.as_slice() {
                    [primary] => Ok(**primary),
                    _ => Err(ClinicError::AmbiguousCandidates {
                        candidates: several.iter().map(|c| c.name.clone()).collect(),
                    }),
                }
            }
        }
    }

    pub fn resolve(
        &self,
        active_profiles: &[String],
        properties: &ProducerProperties,
    ) -> Result<HearingInterpreter> {
        let candidate = self.select(active_profiles)?;
        let producer = (candidate.factory)(properties)?;
        tracing::info!("Resolved word producer '{}'", candidate.name);
        Ok(HearingInterpreter::new(candidate.name.clone(), producer))
    }
}
