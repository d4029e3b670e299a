use crate::cli::{LibraryArgs, LibraryCommands};
use crate::error::Result;
use crate::settings::LibrarySettings;
use std::path::Path;
use tracing::info;

pub fn run(args: &LibraryArgs, settings: &LibrarySettings) -> Result<()> {
    match &args.command {
        LibraryCommands::Path => handle_path(settings),
        LibraryCommands::SetPath { path } => handle_set_path(settings, path),
        LibraryCommands::ResetPath => handle_reset_path(settings),
    }
}

fn handle_path(settings: &LibrarySettings) -> Result<()> {
    match settings.stored_path()? {
        Some(path) => println!("{}", path.display()),
        None => println!("(not set; the default search locations are used)"),
    }
    info!("Library path is stored in {:?}", settings.config_file());
    Ok(())
}

fn handle_set_path(settings: &LibrarySettings, path: &Path) -> Result<()> {
    settings.set_path(path)?;
    if !path.is_file() {
        println!("Warning: {} does not exist yet.", path.display());
    }
    println!("Library path set to: {}", path.display());
    Ok(())
}

fn handle_reset_path(settings: &LibrarySettings) -> Result<()> {
    settings.reset_path()?;
    println!("Library path reset; the default search locations will be used.");
    Ok(())
}
