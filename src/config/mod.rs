pub mod toml_config;

pub use toml_config::{AppConfig, ClinicSource};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-demo")]
#[command(about = "Profile-selected word producers and a vet list controller")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Active profiles, overrides app.active_profiles")]
    pub profiles: Option<Vec<String>>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the word the resolved producer says
    Hear,
    /// List vets through the vet controller
    Vets {
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (or defaults) and applies command-line overrides.
    pub fn load_app_config(&self) -> crate::utils::error::Result<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        Ok(match &self.profiles {
            Some(profiles) => config.with_profiles(profiles.clone()),
            None => config,
        })
    }
}
