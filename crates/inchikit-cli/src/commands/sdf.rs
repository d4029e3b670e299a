use crate::cli::SdfArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::blocking::run_native;
use inchikit::workflows::sdf::export_sdf;
use std::fs;
use tracing::{info, warn};

pub async fn run(args: &SdfArgs, config: &AppConfig) -> Result<()> {
    let library = super::load_library(config)?;
    let inchi = args.inchi.clone();
    let options = super::effective_options(args.options.as_deref(), &config.sdf_options);

    let export = run_native(library, move |lib| export_sdf(lib, &inchi, &options)).await?;

    if !export.status.is_success() {
        return Err(CliError::Conversion(format!(
            "SD export returned {}: {}",
            export.status, export.message
        )));
    }
    if !export.key_status.is_success() {
        warn!(
            "No InChIKey data item written: key generation returned {}",
            export.key_status
        );
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, &export.sdf)?;
    info!("Wrote SD file to {:?}", &args.output);
    println!("{}", args.output.display());
    Ok(())
}
