use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::settings::LibrarySettings;
use inchikit::engine::config::LibraryConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

/// Merges, in order of precedence: `--library`, `--set`, the config file, the
/// persisted library path, then built-in defaults.
pub fn build_config(cli: &Cli, settings: &LibrarySettings) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let library_file = file_config.library.take().unwrap_or_default();
    let options_file = file_config.options.take().unwrap_or_default();

    let explicit_path = match (&cli.library, library_file.path) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) => Some(path),
        (None, None) => settings.stored_path()?,
    };
    debug!("Explicit library path after merge: {:?}", explicit_path);

    let mut builder = LibraryConfigBuilder::new();
    if let Some(path) = explicit_path {
        builder = builder.path(path);
    }
    if let Some(dirs) = library_file.search_paths {
        builder = builder.search_paths(dirs);
    }
    if let Some(names) = library_file.file_names {
        builder = builder.file_names(names);
    }
    let library = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let options = options_file.default.unwrap_or(defaults.options);
    let sdf_options = options_file.sdf.unwrap_or(defaults.sdf_options);

    Ok(AppConfig {
        library,
        options,
        sdf_options,
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "library.path" => {
                config.library.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            "library.search-paths" => {
                config
                    .library
                    .get_or_insert_with(Default::default)
                    .search_paths = Some(
                    split_list(value_str)
                        .into_iter()
                        .map(PathBuf::from)
                        .collect(),
                );
            }
            "library.file-names" => {
                config
                    .library
                    .get_or_insert_with(Default::default)
                    .file_names = Some(split_list(value_str));
            }
            "options.default" => {
                config.options.get_or_insert_with(Default::default).default =
                    Some(value_str.to_string());
            }
            "options.sdf" => {
                config.options.get_or_insert_with(Default::default).sdf =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
