//! Command dispatch for the `clinic-demo` binary.

use crate::config::{CliConfig, Command, OutputFormat};
use crate::core::controller::VetController;
use crate::core::view::{render, to_json, Model};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Loads and validates the configuration, then runs the chosen command.
/// Returns what the binary prints on stdout.
pub async fn run(cli: &CliConfig) -> Result<String> {
    let config = cli.load_app_config()?;
    config.validate()?;
    tracing::info!("Active profiles: {:?}", config.active_profiles());

    match cli.command {
        Command::Hear => {
            let interpreter = config.hearing_interpreter()?;
            Ok(interpreter.what_i_heard())
        }
        Command::Vets { format } => {
            let controller = VetController::new(config.clinic_service()?);
            match format {
                OutputFormat::Html => {
                    let mut model = Model::new();
                    let view = controller.show_vet_list(&mut model).await?;
                    render(view, &model)
                }
                OutputFormat::Json => to_json(&controller.show_resources_vet_list().await?),
            }
        }
    }
}
