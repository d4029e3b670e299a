use super::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Where to look for the native InChI shared library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub explicit_path: Option<PathBuf>,
    pub search_paths: Vec<PathBuf>,
    pub file_names: Vec<String>,
}

impl LibraryConfig {
    /// Every path `resolve` will try, in order.
    ///
    /// An explicit path is authoritative: when set, it is the only candidate.
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return vec![path.clone()];
        }
        self.search_paths
            .iter()
            .flat_map(|dir| self.file_names.iter().map(move |name| dir.join(name)))
            .collect()
    }

    /// Returns the first candidate that exists on disk.
    pub fn resolve(&self) -> Result<PathBuf, EngineError> {
        let candidates = self.candidates();
        for candidate in &candidates {
            trace!(path = %candidate.display(), "Probing for native library");
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Resolved native library");
                return Ok(candidate.clone());
            }
        }
        Err(EngineError::LibraryNotFound {
            searched: candidates,
        })
    }
}

#[derive(Default)]
pub struct LibraryConfigBuilder {
    explicit_path: Option<PathBuf>,
    search_paths: Option<Vec<PathBuf>>,
    file_names: Option<Vec<String>>,
}

impl LibraryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: PathBuf) -> Self {
        self.explicit_path = Some(path);
        self
    }
    /// Appends a directory to search. The first call replaces the platform defaults.
    pub fn search_path(mut self, dir: PathBuf) -> Self {
        self.search_paths.get_or_insert_with(Vec::new).push(dir);
        self
    }
    pub fn search_paths(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_paths = Some(dirs);
        self
    }
    pub fn file_names(mut self, names: Vec<String>) -> Self {
        self.file_names = Some(names);
        self
    }

    pub fn build(self) -> Result<LibraryConfig, ConfigError> {
        let search_paths = self.search_paths.unwrap_or_else(default_search_paths);
        let file_names = self.file_names.unwrap_or_else(default_file_names);

        if self.explicit_path.is_none() {
            if search_paths.is_empty() {
                return Err(ConfigError::MissingParameter("search_paths"));
            }
            if file_names.is_empty() {
                return Err(ConfigError::MissingParameter("file_names"));
            }
        }

        Ok(LibraryConfig {
            explicit_path: self.explicit_path,
            search_paths,
            file_names,
        })
    }
}

/// Standard library directories for the current platform, then the working directory.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/usr/lib"));
        paths.push(PathBuf::from("/lib"));
        if cfg!(target_pointer_width = "64") {
            paths.push(PathBuf::from("/usr/local/lib64"));
            paths.push(PathBuf::from("/usr/lib64"));
            paths.push(PathBuf::from("/usr/lib/x86_64-linux-gnu"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/opt/homebrew/lib"));
        paths.push(PathBuf::from("/usr/lib"));
    }

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from("C:\\Windows\\System32"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// File names the toolkit is commonly installed under on the current platform.
pub fn default_file_names() -> Vec<String> {
    let names: &[&str] = if cfg!(target_os = "windows") {
        &["libinchi.dll", "inchi.dll"]
    } else if cfg!(target_os = "macos") {
        &["libinchi.dylib", "libinchi.1.dylib"]
    } else {
        &["libinchi.so", "libinchi.so.1", "libinchi.so.1.05.00"]
    };
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builder_falls_back_to_platform_defaults() {
        let config = LibraryConfigBuilder::new().build().unwrap();
        assert!(config.explicit_path.is_none());
        assert!(!config.search_paths.is_empty());
        assert_eq!(config.file_names, default_file_names());
    }

    #[test]
    fn builder_rejects_empty_candidate_sets_without_explicit_path() {
        assert_eq!(
            LibraryConfigBuilder::new()
                .file_names(Vec::new())
                .build()
                .unwrap_err(),
            ConfigError::MissingParameter("file_names")
        );
        assert_eq!(
            LibraryConfigBuilder::new()
                .search_paths(Vec::new())
                .build()
                .unwrap_err(),
            ConfigError::MissingParameter("search_paths")
        );
        assert!(
            LibraryConfigBuilder::new()
                .path(PathBuf::from("/opt/libinchi.so"))
                .search_paths(Vec::new())
                .build()
                .is_ok()
        );
    }

    #[test]
    fn resolve_returns_first_existing_candidate_in_search_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(second.path().join("libinchi.so.1"), b"").unwrap();
        fs::write(second.path().join("libinchi.so"), b"").unwrap();

        let config = LibraryConfigBuilder::new()
            .search_path(first.path().to_path_buf())
            .search_path(second.path().to_path_buf())
            .file_names(vec!["libinchi.so".into(), "libinchi.so.1".into()])
            .build()
            .unwrap();

        assert_eq!(config.resolve().unwrap(), second.path().join("libinchi.so"));
    }

    #[test]
    fn explicit_path_is_the_only_candidate() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("libinchi.so"), b"").unwrap();
        let missing = dir.path().join("custom.so");

        let config = LibraryConfigBuilder::new()
            .path(missing.clone())
            .search_path(dir.path().to_path_buf())
            .build()
            .unwrap();

        match config.resolve() {
            Err(EngineError::LibraryNotFound { searched }) => assert_eq!(searched, vec![missing]),
            other => panic!("expected LibraryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn not_found_lists_every_searched_path() {
        let dir = tempdir().unwrap();
        let config = LibraryConfigBuilder::new()
            .search_paths(vec![dir.path().join("a"), dir.path().join("b")])
            .file_names(vec!["x.so".into(), "y.so".into()])
            .build()
            .unwrap();

        let Err(EngineError::LibraryNotFound { searched }) = config.resolve() else {
            panic!("expected LibraryNotFound");
        };
        assert_eq!(
            searched,
            vec![
                dir.path().join("a/x.so"),
                dir.path().join("a/y.so"),
                dir.path().join("b/x.so"),
                dir.path().join("b/y.so"),
            ]
        );
    }
}
