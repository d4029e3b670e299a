//! `#[repr(C)]` mirrors of the native I/O structs and entry-point signatures.

use crate::core::models::atom::AtomRecord;
use crate::core::models::stereo::StereoRecord;
use std::ffi::{c_char, c_int, c_short, c_ulong};
use std::ptr;

/// `inchi_Input`
#[repr(C)]
#[derive(Debug)]
pub struct RawInput {
    pub atom: *mut AtomRecord,
    pub stereo0d: *mut StereoRecord,
    pub options: *mut c_char,
    pub num_atoms: c_short,
    pub num_stereo0d: c_short,
}

/// `inchi_InputINCHI`
#[repr(C)]
#[derive(Debug)]
pub struct RawStringInput {
    pub inchi: *mut c_char,
    pub options: *mut c_char,
}

/// `inchi_Output`
#[repr(C)]
#[derive(Debug)]
pub struct RawOutput {
    pub inchi: *mut c_char,
    pub aux_info: *mut c_char,
    pub message: *mut c_char,
    pub log: *mut c_char,
}

/// `inchi_OutputStruct`
#[repr(C)]
#[derive(Debug)]
pub struct RawStructOutput {
    pub atom: *mut AtomRecord,
    pub stereo0d: *mut StereoRecord,
    pub num_atoms: c_short,
    pub num_stereo0d: c_short,
    pub message: *mut c_char,
    pub log: *mut c_char,
    pub warning_flags: [[c_ulong; 2]; 2],
}

impl RawOutput {
    pub const fn empty() -> Self {
        Self {
            inchi: ptr::null_mut(),
            aux_info: ptr::null_mut(),
            message: ptr::null_mut(),
            log: ptr::null_mut(),
        }
    }
}

impl RawStructOutput {
    pub const fn empty() -> Self {
        Self {
            atom: ptr::null_mut(),
            stereo0d: ptr::null_mut(),
            num_atoms: 0,
            num_stereo0d: 0,
            message: ptr::null_mut(),
            log: ptr::null_mut(),
            warning_flags: [[0; 2]; 2],
        }
    }
}

#[cfg(all(target_pointer_width = "64", not(windows)))]
const _: () = {
    use std::mem::size_of;
    assert!(size_of::<RawInput>() == 32);
    assert!(size_of::<RawStringInput>() == 16);
    assert!(size_of::<RawOutput>() == 32);
    assert!(size_of::<RawStructOutput>() == 72);
};

pub type GetStructFromInchiFn =
    unsafe extern "C" fn(input: *mut RawStringInput, output: *mut RawStructOutput) -> c_int;
pub type GetStdInchiFn =
    unsafe extern "C" fn(input: *mut RawInput, output: *mut RawOutput) -> c_int;
pub type GetInchiFromInchiFn =
    unsafe extern "C" fn(input: *mut RawStringInput, output: *mut RawOutput) -> c_int;
pub type GetStdInchiKeyFn =
    unsafe extern "C" fn(inchi: *const c_char, key_buffer: *mut c_char) -> c_int;
pub type CheckInchiKeyFn = unsafe extern "C" fn(key: *const c_char) -> c_int;
pub type FreeStructFromInchiFn = unsafe extern "C" fn(output: *mut RawStructOutput);
pub type FreeInchiFn = unsafe extern "C" fn(output: *mut RawOutput);
