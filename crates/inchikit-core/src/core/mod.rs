//! # Core Module
//!
//! The foundation of the marshaling layer: everything that must agree byte-for-byte
//! with the native toolkit before any call is made.
//!
//! ## Overview
//!
//! - **Constants** ([`constants`]) - Fixed contract values from `inchi_api.h`
//!   (maximum valence, element symbol width, isotopic shift encoding).
//! - **Records** ([`models`]) - `#[repr(C)]` atom and 0-D stereo records plus the
//!   enumerations stored in their signed-byte fields.
//! - **Unmanaged Buffers** ([`buffers`]) - Contiguous `malloc`/`realloc` backed
//!   buffers for record sequences and the options string.
//!
//! Nothing in this module touches the native library; it only prepares and decodes
//! memory in the shape the library expects.

pub mod buffers;
pub mod constants;
pub mod models;
