use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PATH_FILE_NAME: &str = "library.conf";

/// The library path persisted by `inchikit library set-path`.
#[derive(Debug)]
pub struct LibrarySettings {
    config_file: PathBuf,
}

impl LibrarySettings {
    pub fn new() -> Result<Self> {
        let config_file = ProjectDirs::from("org", "inchikit", "inchikit")
            .map(|dirs| dirs.config_dir().join(PATH_FILE_NAME))
            .ok_or_else(|| {
                CliError::Settings("Could not determine config directory path.".to_string())
            })?;
        debug!("LibrarySettings initialized with file: {:?}", &config_file);
        Ok(Self { config_file })
    }

    pub fn with_config_file(config_file: PathBuf) -> Self {
        Self { config_file }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn stored_path(&self) -> Result<Option<PathBuf>> {
        if !self.config_file.exists() {
            return Ok(None);
        }
        let stored = fs::read_to_string(&self.config_file)?.trim().to_string();
        if stored.is_empty() {
            warn!("Library path file is empty, falling back to search paths.");
            return Ok(None);
        }
        Ok(Some(PathBuf::from(stored)))
    }

    pub fn set_path(&self, path: &Path) -> Result<()> {
        if !path.is_absolute() {
            return Err(CliError::Argument(format!(
                "Library path must be absolute: {}",
                path.display()
            )));
        }
        let text = path.to_str().ok_or_else(|| {
            CliError::Settings(format!("Path is not valid UTF-8: {}", path.display()))
        })?;
        if let Some(parent) = self.config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_file, text).map_err(CliError::from)
    }

    pub fn reset_path(&self) -> Result<()> {
        if self.config_file.exists() {
            fs::remove_file(&self.config_file)?;
        }
        Ok(())
    }
}
