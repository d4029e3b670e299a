use crate::cli::ConvertArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::blocking::run_native;
use inchikit::workflows::convert::inchi_from_inchi;
use tracing::{info, warn};

pub async fn run(args: &ConvertArgs, config: &AppConfig) -> Result<()> {
    let library = super::load_library(config)?;
    let inchi = args.inchi.clone();
    let options = super::effective_options(args.options.as_deref(), &config.options);
    info!("Converting InChI with options {:?}", options);

    let outcome = run_native(library, move |lib| inchi_from_inchi(lib, &inchi, &options)).await?;

    if !outcome.message.is_empty() {
        warn!("Library message: {}", outcome.message);
    }
    if !outcome.status.is_success() {
        return Err(CliError::Conversion(format!(
            "conversion returned {}: {}",
            outcome.status, outcome.message
        )));
    }

    println!("{}", outcome.inchi);
    if !outcome.aux_info.is_empty() {
        println!("{}", outcome.aux_info);
    }
    Ok(())
}
