use inchikit::engine::config::LibraryConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub library: LibraryConfig,
    /// Options for conversions and parsing when `-O` is not given.
    pub options: String,
    /// Options for SD export when `-O` is not given.
    pub sdf_options: String,
}
