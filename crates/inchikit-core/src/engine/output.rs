//! Result handles over memory the native toolkit allocated.
//!
//! A handle borrows the `NativeLibrary` that filled it, because only that library's
//! own free function may release the memory. Each handle type has exactly one
//! release path.

use super::library::NativeLibrary;
use super::lock::serialized;
use super::raw::{RawOutput, RawStructOutput};
use crate::core::models::atom::AtomRecord;
use crate::core::models::stereo::StereoRecord;
use std::ffi::{CStr, c_char};
use std::fmt;
use std::slice;
use tracing::trace;

/// Decodes a native C string, treating null as empty.
pub(crate) fn decode_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Structure decoded from an identifier (`inchi_OutputStruct`).
pub struct StructureOutput<'lib> {
    raw: RawStructOutput,
    library: &'lib NativeLibrary,
}

impl<'lib> StructureOutput<'lib> {
    pub(crate) fn new(library: &'lib NativeLibrary) -> Self {
        Self {
            raw: RawStructOutput::empty(),
            library,
        }
    }

    pub(crate) fn raw_mut(&mut self) -> *mut RawStructOutput {
        &mut self.raw
    }

    pub fn atom_count(&self) -> usize {
        self.raw.num_atoms.max(0) as usize
    }

    pub fn stereo_count(&self) -> usize {
        self.raw.num_stereo0d.max(0) as usize
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        if self.raw.atom.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.raw.atom, self.atom_count()) }
    }

    pub fn stereo(&self) -> &[StereoRecord] {
        if self.raw.stereo0d.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.raw.stereo0d, self.stereo_count()) }
    }

    pub fn message(&self) -> String {
        decode_text(self.raw.message)
    }

    pub fn log(&self) -> String {
        decode_text(self.raw.log)
    }

    /// The `[2][2]` warning flag matrix, row-major.
    pub fn warning_flags(&self) -> [u64; 4] {
        let [[a, b], [c, d]] = self.raw.warning_flags;
        [a.into(), b.into(), c.into(), d.into()]
    }

    pub fn is_released(&self) -> bool {
        self.raw.log.is_null()
    }

    /// Returns the memory through `FreeStructFromINCHI`. A no-op once released.
    pub fn release(&mut self) {
        if self.raw.log.is_null() {
            return;
        }
        let free = self.library.api().free_struct_from_inchi;
        let raw = &mut self.raw;
        serialized("FreeStructFromINCHI", || unsafe { free(raw) });
        self.raw = RawStructOutput::empty();
        trace!("Released structure output");
    }
}

impl Drop for StructureOutput<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for StructureOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureOutput")
            .field("num_atoms", &self.raw.num_atoms)
            .field("num_stereo0d", &self.raw.num_stereo0d)
            .field("released", &self.is_released())
            .finish()
    }
}

/// Identifier text produced by a conversion (`inchi_Output`).
pub struct StringOutput<'lib> {
    raw: RawOutput,
    library: &'lib NativeLibrary,
}

impl<'lib> StringOutput<'lib> {
    pub(crate) fn new(library: &'lib NativeLibrary) -> Self {
        Self {
            raw: RawOutput::empty(),
            library,
        }
    }

    pub(crate) fn raw_mut(&mut self) -> *mut RawOutput {
        &mut self.raw
    }

    pub fn inchi(&self) -> String {
        decode_text(self.raw.inchi)
    }

    pub fn aux_info(&self) -> String {
        decode_text(self.raw.aux_info)
    }

    pub fn message(&self) -> String {
        decode_text(self.raw.message)
    }

    pub fn log(&self) -> String {
        decode_text(self.raw.log)
    }

    pub fn is_released(&self) -> bool {
        self.raw.log.is_null()
    }

    /// Returns the memory through `FreeINCHI`. A no-op once released.
    pub fn release(&mut self) {
        if self.raw.log.is_null() {
            return;
        }
        let free = self.library.api().free_inchi;
        let raw = &mut self.raw;
        serialized("FreeINCHI", || unsafe { free(raw) });
        self.raw = RawOutput::empty();
        trace!("Released string output");
    }
}

impl Drop for StringOutput<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for StringOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringOutput")
            .field("inchi", &self.inchi())
            .field("released", &self.is_released())
            .finish()
    }
}
