use crate::core::buffers::BufferError;
use crate::core::models::RecordError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Native allocation of {requested} bytes failed")]
    ResourceExhausted { requested: usize },

    #[error("Native InChI library not found (searched: {searched:?})")]
    LibraryNotFound { searched: Vec<PathBuf> },

    #[error("Failed to load native library '{path}': {source}")]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("Native library does not export '{symbol}': {source}")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}

impl From<RecordError> for EngineError {
    fn from(err: RecordError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<BufferError> for EngineError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Exhausted { requested } => Self::ResourceExhausted { requested },
            BufferError::InteriorNul { .. } => Self::InvalidArgument(err.to_string()),
        }
    }
}
