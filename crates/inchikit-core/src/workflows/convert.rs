use crate::core::models::atom::AtomRecord;
use crate::core::models::stereo::StereoRecord;
use crate::engine::boundary;
use crate::engine::error::EngineError;
use crate::engine::input::{StringInput, StructuralInput};
use crate::engine::library::NativeLibrary;
use crate::engine::output::{StringOutput, StructureOutput};
use crate::engine::status::ReturnCode;
use tracing::{debug, instrument, warn};

/// Owned result of an identifier-producing conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InchiOutcome {
    pub status: ReturnCode,
    /// Empty unless `status.is_success()`.
    pub inchi: String,
    pub aux_info: String,
    pub message: String,
    pub log: String,
}

impl InchiOutcome {
    fn from_output(status: ReturnCode, output: &StringOutput<'_>) -> Self {
        let (inchi, aux_info) = if status.is_success() {
            (output.inchi(), output.aux_info())
        } else {
            (String::new(), String::new())
        };
        Self {
            status,
            inchi,
            aux_info,
            message: output.message(),
            log: output.log(),
        }
    }
}

/// Owned copy of a structure parsed from an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStructure {
    pub status: ReturnCode,
    /// Empty unless `status.is_success()`.
    pub atoms: Vec<AtomRecord>,
    pub stereo: Vec<StereoRecord>,
    pub message: String,
    pub log: String,
    pub warning_flags: [u64; 4],
}

impl ParsedStructure {
    fn from_output(status: ReturnCode, output: &StructureOutput<'_>) -> Self {
        let (atoms, stereo) = if status.is_success() {
            (output.atoms().to_vec(), output.stereo().to_vec())
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            status,
            atoms,
            stereo,
            message: output.message(),
            log: output.log(),
            warning_flags: output.warning_flags(),
        }
    }

    /// Rebuilds a structural input from the parsed records, e.g. to re-generate
    /// the identifier with other options.
    pub fn to_input(&self, options: &str) -> Result<StructuralInput, EngineError> {
        StructuralInput::from_parts(&self.atoms, &self.stereo, options)
    }
}

fn log_status(operation: &'static str, status: ReturnCode, message: &str) {
    if status.is_success() {
        debug!(operation, %status, "Conversion finished");
    } else {
        warn!(operation, %status, message, "Conversion failed");
    }
}

/// Parses an identifier and copies the structure out of native memory.
///
/// # Errors
///
/// `InvalidArgument` if `inchi` is empty or either string contains NUL. Conversion
/// failures are reported through `ParsedStructure::status`, not as errors.
#[instrument(skip(library), name = "parse_inchi")]
pub fn parse_inchi(
    library: &NativeLibrary,
    inchi: &str,
    options: &str,
) -> Result<ParsedStructure, EngineError> {
    let input = StringInput::new(inchi, options)?;
    let (status, output) = boundary::get_struct_from_inchi(library, &input);
    let parsed = ParsedStructure::from_output(status, &output);
    log_status("GetStructFromINCHI", status, &parsed.message);
    Ok(parsed)
}

/// Parses an identifier and hands the native handle to the caller.
///
/// The caller reads the structure in place and releases it by dropping the handle.
pub fn parse_inchi_handle<'lib>(
    library: &'lib NativeLibrary,
    inchi: &str,
    options: &str,
) -> Result<(ReturnCode, StructureOutput<'lib>), EngineError> {
    let input = StringInput::new(inchi, options)?;
    Ok(boundary::get_struct_from_inchi(library, &input))
}

#[instrument(skip_all, name = "inchi_from_structure", fields(atoms = input.atom_count()))]
pub fn inchi_from_structure(library: &NativeLibrary, input: &StructuralInput) -> InchiOutcome {
    let (status, output) = boundary::get_std_inchi(library, input);
    let outcome = InchiOutcome::from_output(status, &output);
    log_status("GetStdINCHI", status, &outcome.message);
    outcome
}

/// Builds a temporary structural input, converts it, and frees both sides.
pub fn inchi_from_atoms(
    library: &NativeLibrary,
    atoms: &[AtomRecord],
    stereo: &[StereoRecord],
    options: &str,
) -> Result<InchiOutcome, EngineError> {
    let input = StructuralInput::from_parts(atoms, stereo, options)?;
    Ok(inchi_from_structure(library, &input))
}

#[instrument(skip(library), name = "inchi_from_inchi")]
pub fn inchi_from_inchi(
    library: &NativeLibrary,
    inchi: &str,
    options: &str,
) -> Result<InchiOutcome, EngineError> {
    let input = StringInput::new(inchi, options)?;
    let (status, output) = boundary::get_inchi_from_inchi(library, &input);
    let outcome = InchiOutcome::from_output(status, &output);
    log_status("GetINCHIfromINCHI", status, &outcome.message);
    Ok(outcome)
}
