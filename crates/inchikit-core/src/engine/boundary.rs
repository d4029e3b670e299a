//! Raw entry points into the native toolkit.
//!
//! Every function here performs exactly one native call under the process-wide lock
//! and returns the typed status together with whatever the call produced. Nothing
//! is interpreted: a failed conversion still yields its handle, because the
//! toolkit may have allocated a message and log that must be released.

use super::error::EngineError;
use super::input::{StringInput, StructuralInput, to_c_string};
use super::library::NativeLibrary;
use super::lock::serialized;
use super::output::{StringOutput, StructureOutput};
use super::status::{KeyCheck, KeyStatus, ReturnCode};
use crate::core::constants::INCHI_KEY_BUFFER_LEN;
use std::ffi::{CStr, c_char};
use tracing::{debug, error};

fn observe(operation: &'static str, raw: i32) -> ReturnCode {
    let status = ReturnCode::from_raw(raw);
    if status == ReturnCode::Busy {
        error!(
            operation,
            "Native library reported LIBRARY_BUSY although calls are serialized"
        );
    } else {
        debug!(operation, %status, "Native call returned");
    }
    status
}

/// `GetStructFromINCHI`: parses an identifier into atoms and 0-D stereo.
pub fn get_struct_from_inchi<'lib>(
    library: &'lib NativeLibrary,
    input: &StringInput,
) -> (ReturnCode, StructureOutput<'lib>) {
    let call = library.api().get_struct_from_inchi;
    let mut output = StructureOutput::new(library);
    let mut raw_input = input.as_raw();
    let out = output.raw_mut();
    let raw = serialized("GetStructFromINCHI", || unsafe { call(&mut raw_input, out) });
    (observe("GetStructFromINCHI", raw), output)
}

/// `GetStdINCHI`: generates a standard identifier from a structure.
pub fn get_std_inchi<'lib>(
    library: &'lib NativeLibrary,
    input: &StructuralInput,
) -> (ReturnCode, StringOutput<'lib>) {
    let call = library.api().get_std_inchi;
    let mut output = StringOutput::new(library);
    let mut raw_input = input.as_raw();
    let out = output.raw_mut();
    let raw = serialized("GetStdINCHI", || unsafe { call(&mut raw_input, out) });
    (observe("GetStdINCHI", raw), output)
}

/// `GetINCHIfromINCHI`: re-generates an identifier, possibly with other options.
pub fn get_inchi_from_inchi<'lib>(
    library: &'lib NativeLibrary,
    input: &StringInput,
) -> (ReturnCode, StringOutput<'lib>) {
    let call = library.api().get_inchi_from_inchi;
    let mut output = StringOutput::new(library);
    let mut raw_input = input.as_raw();
    let out = output.raw_mut();
    let raw = serialized("GetINCHIfromINCHI", || unsafe { call(&mut raw_input, out) });
    (observe("GetINCHIfromINCHI", raw), output)
}

/// `GetStdINCHIKeyFromStdINCHI`: hashes a standard identifier into a 27-character key.
///
/// The key is read from a 28-byte caller buffer; it is empty unless the status is okay.
pub fn get_std_inchi_key(
    library: &NativeLibrary,
    inchi: &str,
) -> Result<(KeyStatus, String), EngineError> {
    let call = library.api().get_std_inchi_key;
    let inchi = to_c_string(inchi, "identifier")?;
    let mut buffer = [0 as c_char; INCHI_KEY_BUFFER_LEN];

    let raw = serialized("GetStdINCHIKeyFromStdINCHI", || unsafe {
        call(inchi.as_ptr(), buffer.as_mut_ptr())
    });
    let status = KeyStatus::from_raw(raw);
    debug!(operation = "GetStdINCHIKeyFromStdINCHI", %status, "Native call returned");

    // The last byte is forced to NUL so a misbehaving library cannot overrun the read.
    buffer[INCHI_KEY_BUFFER_LEN - 1] = 0;
    let key = if status.is_success() {
        unsafe { CStr::from_ptr(buffer.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    } else {
        String::new()
    };
    Ok((status, key))
}

/// `CheckINCHIKey`: validates the layout and checksum of a key.
pub fn check_inchi_key(library: &NativeLibrary, key: &str) -> Result<KeyCheck, EngineError> {
    let call = library.api().check_inchi_key;
    let key = to_c_string(key, "key")?;
    let raw = serialized("CheckINCHIKey", || unsafe { call(key.as_ptr()) });
    let check = KeyCheck::from_raw(raw);
    debug!(operation = "CheckINCHIKey", %check, "Native call returned");
    Ok(check)
}
