use crate::cli::CheckKeyArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::blocking::run_native;
use inchikit::workflows::key::check_inchi_key;

pub async fn run(args: &CheckKeyArgs, config: &AppConfig) -> Result<()> {
    let library = super::load_library(config)?;
    let key = args.key.clone();
    let check = run_native(library, move |lib| check_inchi_key(lib, &key)).await?;
    println!("{}", check.name());

    if check.is_valid() {
        Ok(())
    } else {
        Err(CliError::Conversion(format!(
            "'{}' is not a valid InChIKey: {}",
            args.key, check
        )))
    }
}
