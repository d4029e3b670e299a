//! # Engine Module
//!
//! Everything that crosses into the native toolkit: loading it, assembling inputs,
//! making the calls, and owning what the calls return.
//!
//! ## Overview
//!
//! A call follows one fixed protocol: build an input aggregate, invoke a
//! [`boundary`] function, receive a status plus a result handle, read the handle
//! through its accessors, and drop (or `release()`) it so the toolkit's own free
//! function returns the memory. Every native call, frees included, runs under a
//! single process-wide lock because the toolkit is not re-entrant.
//!
//! ## Architecture
//!
//! - **Library** ([`library`], [`config`]) - Locating and loading the shared library,
//!   or wrapping entry points supplied in-process
//! - **Inputs** ([`input`]) - `StructuralInput` over native buffers and `StringInput`
//! - **Outputs** ([`output`]) - `StructureOutput` and `StringOutput` result handles
//! - **Boundary** ([`boundary`]) - One function per native entry point
//! - **Status** ([`status`]) - `ReturnCode`, `KeyStatus` and `KeyCheck`
//! - **Error Handling** ([`error`]) - `EngineError`
//! - **Raw Layouts** ([`raw`]) - `#[repr(C)]` mirrors of the native I/O structs

pub mod boundary;
pub mod config;
pub mod error;
pub mod input;
pub mod library;
pub(crate) mod lock;
pub mod output;
pub mod raw;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;
