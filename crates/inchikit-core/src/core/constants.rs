//! Contract values shared with the native toolkit (`inchi_api.h`).

/// Maximum number of bonds a single atom can carry (`MAXVAL`).
pub const MAX_BONDS: usize = 20;

/// Width of the inline element symbol buffer (`ATOM_EL_LEN`).
pub const ATOM_ELEMENT_LEN: usize = 6;

/// Number of hydrogen isotopes tracked per atom (`NUM_H_ISOTOPES`).
///
/// The implicit hydrogen array carries one extra leading slot for non-isotopic H.
pub const NUM_H_ISOTOPES: usize = 3;

/// Length of the implicit hydrogen count array in an atom record.
pub const IMPLICIT_H_SLOTS: usize = NUM_H_ISOTOPES + 1;

/// Number of neighbor slots in a 0-D stereo record.
pub const STEREO_NEIGHBORS: usize = 4;

/// Largest atom index that may appear in a neighbor or central-atom field.
pub const MAX_ATOM_INDEX: i16 = 1023;

/// Largest number of atoms a single structure may hold.
pub const MAX_ATOMS: usize = MAX_ATOM_INDEX as usize + 1;

/// Central-atom sentinel for stereo elements that have no central atom.
pub const NO_ATOM: i16 = -1;

/// Added to an isotopic mass difference to mark the field as a shift.
pub const ISOTOPIC_SHIFT_FLAG: i16 = 10000;

/// Largest absolute isotopic shift (`|isotopic mass - average atomic mass|`).
pub const ISOTOPIC_SHIFT_MAX: i16 = 100;

/// Size of the caller-supplied buffer that receives an InChIKey, NUL included.
pub const INCHI_KEY_BUFFER_LEN: usize = 28;

/// Leading character of option tokens on this platform.
#[cfg(windows)]
pub const OPTION_PREFIX: char = '/';
/// Leading character of option tokens on this platform.
#[cfg(not(windows))]
pub const OPTION_PREFIX: char = '-';

/// Builds a single option token with the platform prefix, e.g. `-OutputSDF`.
pub fn option_token(name: &str) -> String {
    format!("{}{}", OPTION_PREFIX, name)
}
