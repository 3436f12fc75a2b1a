use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No word producer available for active profiles [{}]", .profiles.join(", "))]
    NoCandidate { profiles: Vec<String> },

    #[error("Expected a single word producer but found: {}", .candidates.join(", "))]
    AmbiguousCandidates { candidates: Vec<String> },

    #[error("Clinic service error: {message}")]
    ServiceError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Resolution,
    Service,
    Rendering,
    System,
}

impl ClinicError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClinicError::ConfigError { .. }
            | ClinicError::InvalidConfigValueError { .. }
            | ClinicError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ClinicError::NoCandidate { .. } | ClinicError::AmbiguousCandidates { .. } => {
                ErrorCategory::Resolution
            }
            ClinicError::HttpError(_) | ClinicError::CsvError(_) | ClinicError::ServiceError { .. } => {
                ErrorCategory::Service
            }
            ClinicError::RenderError { .. } | ClinicError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            ClinicError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Resolution => format!("Could not pick a word producer: {}", self),
            ErrorCategory::Service => format!("Could not load vets: {}", self),
            ErrorCategory::Rendering => format!("Could not render output: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// Process exit code for the CLI. Every failure is fatal to the command.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClinicError::NoCandidate { .. } => {
                "Activate a profile that enables a producer, or register an unscoped one"
            }
            ClinicError::AmbiguousCandidates { .. } => {
                "Mark exactly one producer as primary (hearing.primary) or narrow the active profiles"
            }
            ClinicError::MissingConfigError { .. } => "Add the missing key to the configuration file",
            ClinicError::ConfigError { .. } | ClinicError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
            ClinicError::HttpError(_) | ClinicError::ServiceError { .. } => {
                "Check that the clinic endpoint is reachable and returns vets as JSON"
            }
            ClinicError::CsvError(_) => "Check the CSV header: id,first_name,last_name,specialties",
            ClinicError::SerializationError(_) | ClinicError::RenderError { .. } => {
                "Try another output format"
            }
            ClinicError::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
