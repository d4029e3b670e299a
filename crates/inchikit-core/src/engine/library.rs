use super::config::LibraryConfig;
use super::error::EngineError;
use super::raw::{
    CheckInchiKeyFn, FreeInchiFn, FreeStructFromInchiFn, GetInchiFromInchiFn, GetStdInchiFn,
    GetStdInchiKeyFn, GetStructFromInchiFn,
};
use libloading::Library;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The native entry points the call boundary uses, resolved once.
#[derive(Clone, Copy)]
pub struct InchiApi {
    pub get_struct_from_inchi: GetStructFromInchiFn,
    pub get_std_inchi: GetStdInchiFn,
    pub get_inchi_from_inchi: GetInchiFromInchiFn,
    pub get_std_inchi_key: GetStdInchiKeyFn,
    pub check_inchi_key: CheckInchiKeyFn,
    pub free_struct_from_inchi: FreeStructFromInchiFn,
    pub free_inchi: FreeInchiFn,
}

/// A loaded InChI toolkit.
///
/// Holds the shared library open for as long as any entry point may be called.
/// Result handles borrow the library, so it cannot be dropped while one is alive.
pub struct NativeLibrary {
    api: InchiApi,
    path: Option<PathBuf>,
    _library: Option<Library>,
}

impl NativeLibrary {
    /// Opens the shared library at `path` and resolves every entry point.
    ///
    /// # Errors
    ///
    /// - `LibraryLoad` if the file cannot be opened as a shared library.
    /// - `MissingSymbol` if any of the seven entry points is not exported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        // Loading runs the library's initializers; the InChI toolkit has none with side effects.
        let library = unsafe { Library::new(path) }.map_err(|source| EngineError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let api = unsafe {
            InchiApi {
                get_struct_from_inchi: symbol(&library, "GetStructFromINCHI")?,
                get_std_inchi: symbol(&library, "GetStdINCHI")?,
                get_inchi_from_inchi: symbol(&library, "GetINCHIfromINCHI")?,
                get_std_inchi_key: symbol(&library, "GetStdINCHIKeyFromStdINCHI")?,
                check_inchi_key: symbol(&library, "CheckINCHIKey")?,
                free_struct_from_inchi: symbol(&library, "FreeStructFromINCHI")?,
                free_inchi: symbol(&library, "FreeINCHI")?,
            }
        };

        debug!(path = %path.display(), "Loaded native InChI library");
        Ok(Self {
            api,
            path: Some(path.to_path_buf()),
            _library: Some(library),
        })
    }

    /// Resolves the library location from `config` and loads it.
    pub fn from_config(config: &LibraryConfig) -> Result<Self, EngineError> {
        let path = config.resolve()?;
        Self::load(path)
    }

    /// Wraps entry points that are already linked into the process.
    ///
    /// # Safety
    ///
    /// Every function in `api` must follow the InChI C contract for its symbol: the
    /// conversions fill their output struct, the two free functions release exactly
    /// what the matching conversion allocated, and the key buffer is written with at
    /// most 28 bytes.
    pub unsafe fn from_api(api: InchiApi) -> Self {
        Self {
            api,
            path: None,
            _library: None,
        }
    }

    pub(crate) fn api(&self) -> &InchiApi {
        &self.api
    }

    /// The file the library was loaded from, if it was loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Copies a function pointer out of `library`.
///
/// # Safety
///
/// `T` must be the exact signature of the exported symbol, and the pointer must not
/// be called after `library` is dropped.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, EngineError> {
    trace!(symbol = name, "Resolving native entry point");
    let resolved = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| EngineError::MissingSymbol {
            symbol: name,
            source,
        })?;
    Ok(*resolved)
}
