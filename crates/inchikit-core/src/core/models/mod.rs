//! # Core Models Module
//!
//! Fixed-layout records exchanged with the native toolkit.
//!
//! ## Overview
//!
//! Both record types are plain `#[repr(C)]` value types whose field order, widths and
//! padding reproduce `inchi_Atom` and `inchi_Stereo0D` exactly. They are copied
//! byte-for-byte into native buffers and read back the same way, so the layout is the
//! correctness requirement: a mismatch is never reported by the native library, it
//! silently corrupts every record after the first.
//!
//! Small arrays are stored inline, never behind pointers. Setters take slices so that
//! callers holding dynamically sized data get a `RecordError` for a wrong length
//! instead of a truncated or padded copy.
//!
//! ## Key Components
//!
//! - [`atom`] - `AtomRecord`, one atom with its bonds, hydrogens, isotope, radical and charge
//! - [`stereo`] - `StereoRecord`, one 0-D stereo element with its kind and parity
//! - [`topology`] - Bond type, 2-D bond stereo and radical enumerations

pub mod atom;
pub mod stereo;
pub mod topology;

use crate::core::constants::MAX_ATOM_INDEX;
use thiserror::Error;

/// A precondition violated while building or modifying a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("field '{field}' must have exactly {expected} elements, got {actual}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field '{field}' contains atom index {value}, allowed range is [{min}, {max}]")]
    IndexOutOfRange {
        field: &'static str,
        value: i16,
        min: i16,
        max: i16,
    },

    #[error("element symbol '{symbol}' is longer than {max} bytes")]
    ElementTooLong { symbol: String, max: usize },

    #[error("element symbol must not contain NUL bytes")]
    ElementContainsNul,

    #[error("value {value} for field '{field}' is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("stereo kind '{kind}' requires {requirement}, got central atom {central_atom}")]
    InconsistentStereoCenter {
        kind: &'static str,
        requirement: &'static str,
        central_atom: i16,
    },
}

/// Copies `values` into a fixed array, failing unless the length matches exactly.
pub(crate) fn fixed_array<T: Copy, const N: usize>(
    values: &[T],
    field: &'static str,
) -> Result<[T; N], RecordError> {
    <[T; N]>::try_from(values).map_err(|_| RecordError::WrongLength {
        field,
        expected: N,
        actual: values.len(),
    })
}

/// Checks that every value is a valid atom index in `[0, MAX_ATOM_INDEX]`.
pub(crate) fn check_atom_indices(values: &[i16], field: &'static str) -> Result<(), RecordError> {
    match values.iter().find(|&&v| !(0..=MAX_ATOM_INDEX).contains(&v)) {
        Some(&value) => Err(RecordError::IndexOutOfRange {
            field,
            value,
            min: 0,
            max: MAX_ATOM_INDEX,
        }),
        None => Ok(()),
    }
}
