//! # inchikit
//!
//! A safe marshaling layer over the native C interface of the IUPAC InChI toolkit:
//! structure-to-identifier conversion, identifier parsing and reformatting, and
//! InChIKey generation and validation.
//!
//! ## Architectural Philosophy
//!
//! The chemistry itself happens entirely inside the native library. This crate is
//! concerned with getting data across the boundary intact and getting native memory
//! back to the allocator that produced it. It is organized in three layers:
//!
//! - **[`core`]: The Foundation.** Fixed-layout records (`AtomRecord`, `StereoRecord`)
//!   that bit-match the C structs, the toolkit's constants, and the growable unmanaged
//!   buffers used to assemble variable-length record lists.
//!
//! - **[`engine`]: The Call Boundary.** Loading the shared library, the input
//!   aggregates and result handles that own or view native memory, the raw
//!   status-returning entry points, and the process-wide lock that serializes them.
//!
//! - **[`workflows`]: The Public API.** Convenience wrappers that build the input
//!   aggregate, call the native entry point, copy out the payload and release the
//!   result handle on every exit path.
//!
//! ## Example
//!
//! ```no_run
//! use inchikit::engine::config::LibraryConfigBuilder;
//! use inchikit::engine::library::NativeLibrary;
//! use inchikit::workflows;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LibraryConfigBuilder::new().build()?;
//! let library = NativeLibrary::from_config(&config)?;
//!
//! let key = workflows::key::inchi_key(&library, "InChI=1S/CH4/h1H4")?;
//! println!("{} ({})", key.key, key.status);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
