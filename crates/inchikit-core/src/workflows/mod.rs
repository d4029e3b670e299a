//! # Workflows Module
//!
//! Convenience entry points over the call boundary that never leak a result handle.
//!
//! ## Overview
//!
//! Each workflow builds its input, makes one or more native calls, copies what it
//! needs out of the result handles into owned values and releases every handle
//! before returning, on success and on error statuses alike. The status is always
//! surfaced; payload fields are empty when the status says the call failed.
//!
//! - **Conversions** ([`convert`]) - Identifier to structure, structure to
//!   identifier, identifier to identifier
//! - **Keys** ([`key`]) - Key generation and key validation
//! - **SD Export** ([`sdf`]) - Identifier to SD file text annotated with its key

pub mod convert;
pub mod key;
pub mod sdf;
