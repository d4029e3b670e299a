use crate::error::{CliError, Result};
use inchikit::engine::error::EngineError;
use inchikit::engine::library::NativeLibrary;
use std::sync::Arc;
use tokio::task;

/// Runs a native call on the blocking pool and waits for it.
///
/// The join handle is always awaited, so no native call outlives the command that
/// started it.
pub async fn run_native<T, F>(library: Arc<NativeLibrary>, f: F) -> Result<T>
where
    F: FnOnce(&NativeLibrary) -> std::result::Result<T, EngineError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(move || f(&library))
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!("Native call task failed: {}", e)))?
        .map_err(CliError::from)
}
