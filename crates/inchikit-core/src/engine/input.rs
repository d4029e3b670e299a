use super::error::EngineError;
use super::raw::{RawInput, RawStringInput};
use crate::core::buffers::{NativeSequence, NativeText};
use crate::core::constants::MAX_ATOMS;
use crate::core::models::atom::AtomRecord;
use crate::core::models::stereo::StereoRecord;
use std::ffi::{CString, c_char};
use tracing::trace;

/// Largest stereo count the native `short` count field can carry.
const MAX_STEREO: usize = i16::MAX as usize;

/// A structure assembled for `GetStdINCHI`: atoms, optional 0-D stereo, options.
///
/// All three parts live in C-allocated memory owned by this value and are freed
/// exactly once, by `release()` or on drop. Empty parts are null pointers.
#[derive(Debug, Default)]
pub struct StructuralInput {
    atoms: NativeSequence<AtomRecord>,
    stereo: NativeSequence<StereoRecord>,
    options: NativeText,
}

impl StructuralInput {
    pub fn new(options: &str) -> Result<Self, EngineError> {
        Ok(Self {
            atoms: NativeSequence::new(),
            stereo: NativeSequence::new(),
            options: NativeText::new(options, "options")?,
        })
    }

    /// Builds an input from complete atom and stereo lists.
    pub fn from_parts(
        atoms: &[AtomRecord],
        stereo: &[StereoRecord],
        options: &str,
    ) -> Result<Self, EngineError> {
        let mut input = Self::new(options)?;
        input.set_atoms(atoms)?;
        input.set_stereo(stereo)?;
        trace!(
            atoms = input.atom_count(),
            stereo = input.stereo_count(),
            "Assembled structural input"
        );
        Ok(input)
    }

    /// Appends an atom. Indices address at most 1024 atoms, so that is the cap.
    pub fn add_atom(&mut self, atom: AtomRecord) -> Result<(), EngineError> {
        if self.atoms.len() >= MAX_ATOMS {
            return Err(EngineError::InvalidArgument(format!(
                "a structure holds at most {MAX_ATOMS} atoms"
            )));
        }
        self.atoms.push(atom)?;
        Ok(())
    }

    pub fn add_stereo(&mut self, stereo: StereoRecord) -> Result<(), EngineError> {
        if self.stereo.len() >= MAX_STEREO {
            return Err(EngineError::InvalidArgument(format!(
                "a structure holds at most {MAX_STEREO} stereo elements"
            )));
        }
        self.stereo.push(stereo)?;
        Ok(())
    }

    /// Replaces every atom. The new block is built before the old one is freed, so
    /// on error the previous atoms are still in place.
    pub fn set_atoms(&mut self, atoms: &[AtomRecord]) -> Result<(), EngineError> {
        self.atoms = rebuilt(atoms, MAX_ATOMS, "atoms")?;
        Ok(())
    }

    /// Replaces every stereo element, with the same guarantee as `set_atoms`.
    pub fn set_stereo(&mut self, stereo: &[StereoRecord]) -> Result<(), EngineError> {
        self.stereo = rebuilt(stereo, MAX_STEREO, "stereo elements")?;
        Ok(())
    }

    pub fn set_options(&mut self, options: &str) -> Result<(), EngineError> {
        self.options = NativeText::new(options, "options")?;
        Ok(())
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        self.atoms.as_slice()
    }

    pub fn stereo(&self) -> &[StereoRecord] {
        self.stereo.as_slice()
    }

    pub fn options(&self) -> &str {
        self.options.as_str()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn stereo_count(&self) -> usize {
        self.stereo.len()
    }

    pub fn atoms_ptr(&self) -> *const AtomRecord {
        self.atoms.as_ptr()
    }

    pub fn stereo_ptr(&self) -> *const StereoRecord {
        self.stereo.as_ptr()
    }

    pub fn options_ptr(&self) -> *const c_char {
        self.options.as_ptr()
    }

    /// Pointer view passed to the native call. Valid while `self` is neither
    /// modified nor released.
    pub(crate) fn as_raw(&self) -> RawInput {
        RawInput {
            atom: self.atoms.as_ptr().cast_mut(),
            stereo0d: self.stereo.as_ptr().cast_mut(),
            options: self.options.as_ptr().cast_mut(),
            // Both counts are capped well below i16::MAX + 1 on insertion.
            num_atoms: self.atoms.len() as i16,
            num_stereo0d: self.stereo.len() as i16,
        }
    }

    /// Frees all three native buffers. Calling it again does nothing.
    pub fn release(&mut self) {
        self.atoms.release();
        self.stereo.release();
        self.options.release();
    }
}

impl Drop for StructuralInput {
    fn drop(&mut self) {
        self.release();
    }
}

fn rebuilt<T: Copy>(
    records: &[T],
    cap: usize,
    what: &str,
) -> Result<NativeSequence<T>, EngineError> {
    if records.len() > cap {
        return Err(EngineError::InvalidArgument(format!(
            "a structure holds at most {cap} {what}, got {}",
            records.len()
        )));
    }
    let mut sequence = NativeSequence::new();
    sequence.extend(records.iter().copied())?;
    Ok(sequence)
}

/// An identifier plus options for `GetStructFromINCHI` and `GetINCHIfromINCHI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringInput {
    inchi: CString,
    options: CString,
}

impl StringInput {
    /// # Errors
    ///
    /// `InvalidArgument` if `inchi` is empty or either string contains a NUL byte.
    pub fn new(inchi: &str, options: &str) -> Result<Self, EngineError> {
        if inchi.is_empty() {
            return Err(EngineError::InvalidArgument(
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(Self {
            inchi: to_c_string(inchi, "identifier")?,
            options: to_c_string(options, "options")?,
        })
    }

    pub fn inchi(&self) -> &str {
        self.inchi.to_str().unwrap_or_default()
    }

    pub fn options(&self) -> &str {
        self.options.to_str().unwrap_or_default()
    }

    pub(crate) fn as_raw(&self) -> RawStringInput {
        RawStringInput {
            inchi: self.inchi.as_ptr().cast_mut(),
            options: self.options.as_ptr().cast_mut(),
        }
    }
}

pub(crate) fn to_c_string(text: &str, field: &'static str) -> Result<CString, EngineError> {
    CString::new(text)
        .map_err(|_| EngineError::InvalidArgument(format!("{field} contains an interior NUL byte")))
}
