use crate::cli::KeyArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::blocking::run_native;
use inchikit::workflows::key::{KeyOutcome, inchi_key};
use tracing::info;

pub async fn run(args: &KeyArgs, config: &AppConfig) -> Result<()> {
    let library = super::load_library(config)?;
    let inchi = args.inchi.clone();
    let outcome = run_native(library, move |lib| inchi_key(lib, &inchi)).await?;
    info!("Key generation finished with status {}", outcome.status);
    println!("{}", render(&outcome));

    if outcome.status.is_success() {
        Ok(())
    } else {
        Err(CliError::Conversion(format!(
            "key generation returned {}",
            outcome.status
        )))
    }
}

pub fn render(outcome: &KeyOutcome) -> String {
    if outcome.key.is_empty() {
        format!("status: {}", outcome.status)
    } else {
        format!("{}\nstatus: {}", outcome.key, outcome.status)
    }
}
