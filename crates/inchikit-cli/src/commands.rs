pub mod check_key;
pub mod convert;
pub mod key;
pub mod library;
pub mod parse;
pub mod sdf;

use crate::config::AppConfig;
use crate::error::Result;
use inchikit::engine::library::NativeLibrary;
use std::sync::Arc;
use tracing::info;

pub fn load_library(config: &AppConfig) -> Result<Arc<NativeLibrary>> {
    let library = NativeLibrary::from_config(&config.library)?;
    info!("Using native InChI library at {:?}", library.path());
    Ok(Arc::new(library))
}

/// `-O` wins over the configured options.
pub fn effective_options(cli_options: Option<&str>, configured: &str) -> String {
    cli_options.unwrap_or(configured).to_string()
}
