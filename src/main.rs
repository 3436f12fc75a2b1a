use clap::Parser;
use clinic_demo::utils::logger;
use clinic_demo::{app, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting clinic-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match app::run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
