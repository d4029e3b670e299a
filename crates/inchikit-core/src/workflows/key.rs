use crate::engine::boundary;
use crate::engine::error::EngineError;
use crate::engine::library::NativeLibrary;
use crate::engine::status::{KeyCheck, KeyStatus};
use tracing::{instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub status: KeyStatus,
    /// Empty unless `status` is `KeyStatus::Okay`.
    pub key: String,
}

/// Computes the standard key of a standard identifier.
#[instrument(skip(library), name = "inchi_key")]
pub fn inchi_key(library: &NativeLibrary, inchi: &str) -> Result<KeyOutcome, EngineError> {
    let (status, key) = boundary::get_std_inchi_key(library, inchi)?;
    if !status.is_success() {
        warn!(%status, "Key generation failed");
    }
    Ok(KeyOutcome { status, key })
}

#[instrument(skip(library), name = "check_inchi_key")]
pub fn check_inchi_key(library: &NativeLibrary, key: &str) -> Result<KeyCheck, EngineError> {
    boundary::check_inchi_key(library, key)
}
