mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod settings;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::settings::LibrarySettings;
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("inchikit CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = LibrarySettings::new()?;

    let command_result = dispatch(&cli, &settings).await;

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}

/// Only commands that call into the native library build the merged configuration.
async fn dispatch(cli: &Cli, settings: &LibrarySettings) -> Result<()> {
    match &cli.command {
        Commands::Library(args) => {
            info!("Dispatching to 'library' command.");
            commands::library::run(args, settings)
        }
        Commands::Key(args) => {
            let app_config = load_config(cli, settings)?;
            commands::key::run(args, &app_config).await
        }
        Commands::CheckKey(args) => {
            let app_config = load_config(cli, settings)?;
            commands::check_key::run(args, &app_config).await
        }
        Commands::Convert(args) => {
            let app_config = load_config(cli, settings)?;
            commands::convert::run(args, &app_config).await
        }
        Commands::Parse(args) => {
            let app_config = load_config(cli, settings)?;
            commands::parse::run(args, &app_config).await
        }
        Commands::Sdf(args) => {
            let app_config = load_config(cli, settings)?;
            commands::sdf::run(args, &app_config).await
        }
    }
}

fn load_config(cli: &Cli, settings: &LibrarySettings) -> Result<config::AppConfig> {
    let app_config = config::build_config(cli, settings)?;
    debug!("Merged configuration: {:?}", &app_config);
    Ok(app_config)
}
