//! Identifier to SD file, annotated with the identifier's key.
//!
//! The toolkit writes SD text when a structure is converted with the `OutputSDF`
//! option, so the pipeline is: parse the identifier, compute its key, feed the
//! parsed records back in with `OutputSDF`, then add the key as a data item.

use super::convert::{inchi_from_structure, parse_inchi};
use super::key::inchi_key;
use crate::core::constants::option_token;
use crate::engine::error::EngineError;
use crate::engine::library::NativeLibrary;
use crate::engine::status::{KeyStatus, ReturnCode};
use tracing::{info, instrument, warn};

const RECORD_TERMINATOR: &str = "$$$$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdfExport {
    /// Status of the first failing conversion, or of the SD generation.
    pub status: ReturnCode,
    pub key_status: KeyStatus,
    pub key: String,
    /// Empty unless `status.is_success()`.
    pub sdf: String,
    pub message: String,
}

/// Appends `option` to an options string, space-separated.
fn with_option(options: &str, option: &str) -> String {
    if options.trim().is_empty() {
        option.to_string()
    } else {
        format!("{} {}", options.trim(), option)
    }
}

/// Inserts an SD data item just before the last record terminator.
///
/// Text without a terminator gets the item and a terminator appended.
pub fn insert_data_item(sdf: &str, name: &str, value: &str) -> String {
    let item = format!("> <{name}>\n{value}\n\n");
    match sdf.rfind(RECORD_TERMINATOR) {
        Some(at) => format!("{}{}{}", &sdf[..at], item, &sdf[at..]),
        None => {
            let mut text = sdf.to_string();
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&item);
            text.push_str(RECORD_TERMINATOR);
            text.push('\n');
            text
        }
    }
}

#[instrument(skip(library), name = "export_sdf")]
pub fn export_sdf(
    library: &NativeLibrary,
    inchi: &str,
    options: &str,
) -> Result<SdfExport, EngineError> {
    let parsed = parse_inchi(library, inchi, "")?;
    let key = inchi_key(library, inchi)?;

    if !parsed.status.is_success() {
        return Ok(SdfExport {
            status: parsed.status,
            key_status: key.status,
            key: key.key,
            sdf: String::new(),
            message: parsed.message,
        });
    }

    let input = parsed.to_input(&with_option(options, &option_token("OutputSDF")))?;
    let generated = inchi_from_structure(library, &input);
    if !generated.status.is_success() {
        return Ok(SdfExport {
            status: generated.status,
            key_status: key.status,
            key: key.key,
            sdf: String::new(),
            message: generated.message,
        });
    }

    let sdf = if key.status.is_success() {
        insert_data_item(&generated.inchi, "INCHIKEY", &key.key)
    } else {
        warn!(status = %key.status, "Exporting SD text without a key item");
        generated.inchi
    };
    info!(atoms = parsed.atoms.len(), "Generated SD text");

    Ok(SdfExport {
        status: generated.status,
        key_status: key.status,
        key: key.key,
        sdf,
        message: generated.message,
    })
}
