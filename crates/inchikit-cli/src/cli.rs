use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The inchikit developers",
    version,
    about = "inchikit CLI - Generate, convert, parse and check InChI identifiers and keys through the native IUPAC InChI library.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to the native InChI shared library, overriding every other source.
    #[arg(long, global = true, env = "INCHIKIT_LIBRARY", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S options.default=-FixedH
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the standard InChIKey of a standard InChI.
    Key(KeyArgs),
    /// Check the layout and checksum of an InChIKey.
    CheckKey(CheckKeyArgs),
    /// Re-generate an InChI from an InChI, optionally with other options.
    Convert(ConvertArgs),
    /// Decode an InChI into its atoms and stereo elements.
    Parse(ParseArgs),
    /// Write an SD file for an InChI, annotated with its InChIKey.
    Sdf(SdfArgs),
    /// Manage the persisted location of the native InChI library.
    Library(LibraryArgs),
}

/// Arguments for the `key` subcommand.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// The standard InChI string (e.g., 'InChI=1S/CH4/h1H4').
    #[arg(required = true)]
    pub inchi: String,
}

/// Arguments for the `check-key` subcommand.
#[derive(Args, Debug)]
pub struct CheckKeyArgs {
    /// The InChIKey to validate.
    #[arg(required = true)]
    pub key: String,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The InChI string to convert.
    #[arg(required = true)]
    pub inchi: String,

    /// Options passed verbatim to the library, overriding `options.default`.
    #[arg(short = 'O', long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub options: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The InChI string to decode.
    #[arg(required = true)]
    pub inchi: String,

    /// Options passed verbatim to the library, overriding `options.default`.
    #[arg(short = 'O', long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Output format for the decoded structure.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `sdf` subcommand.
#[derive(Args, Debug)]
pub struct SdfArgs {
    /// The InChI string to export.
    #[arg(required = true)]
    pub inchi: String,

    /// Path for the output SD file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Options passed verbatim to the library, overriding `options.sdf`.
    #[arg(short = 'O', long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub options: Option<String>,
}

/// Arguments for the `library` subcommand.
#[derive(Args, Debug)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub command: LibraryCommands,
}

/// Available commands for library path management.
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// Show the persisted library path and where it is stored.
    Path,
    /// Persist an absolute path to the native library.
    SetPath {
        /// Path to the shared library file.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Forget the persisted path and fall back to the default search locations.
    ResetPath,
}
