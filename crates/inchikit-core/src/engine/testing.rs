//! An in-process stand-in for the native toolkit.
//!
//! Implements the seven C entry points with `libc` allocation so that every
//! ownership path (allocate in the library, read through a handle, release through
//! the matching free function) runs for real. It knows a handful of fixed
//! molecules; anything else gets the toolkit's error statuses.

use super::library::{InchiApi, NativeLibrary};
use super::raw::{RawInput, RawOutput, RawStringInput, RawStructOutput};
use crate::core::models::atom::AtomRecord;
use crate::core::models::stereo::{StereoParity, StereoRecord};
use crate::core::models::topology::{BondStereo2D, BondType};
use std::collections::BTreeMap;
use std::env;
use std::ffi::{CStr, c_char, c_int};
use std::fmt::Write as _;
use std::mem::size_of;
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

pub const DIFLUOROETHENE: &str = "InChI=1S/C2H2F2/c3-1-2-4/h1-2H/b2-1+";
pub const DIFLUOROETHENE_KEY: &str = "WFLOTYSKFUPZQB-OWOJBTEDSA-N";
pub const METHANE: &str = "InChI=1S/CH4/h1H4";
pub const METHANE_KEY: &str = "VNWKTOKETHGBQD-UHFFFAOYSA-N";
/// A 25-character key in the legacy format, which carries a checksum character.
pub const LEGACY_KEY: &str = "WFLOTYSKFUPZQB-OWOJBTEDBV";

/// Environment variable naming a real toolkit build for integration tests.
pub const REAL_LIBRARY_ENV: &str = "INCHIKIT_TEST_LIBRARY";

static STRUCTURE_RELEASES: AtomicUsize = AtomicUsize::new(0);
static STRING_RELEASES: AtomicUsize = AtomicUsize::new(0);
static IN_FLIGHT: AtomicBool = AtomicBool::new(false);
static OVERLAPS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseCounts {
    pub structures: usize,
    pub strings: usize,
}

pub fn release_counts() -> ReleaseCounts {
    ReleaseCounts {
        structures: STRUCTURE_RELEASES.load(Ordering::SeqCst),
        strings: STRING_RELEASES.load(Ordering::SeqCst),
    }
}

pub fn overlap_count() -> usize {
    OVERLAPS.load(Ordering::SeqCst)
}

pub fn reset_overlap_count() {
    OVERLAPS.store(0, Ordering::SeqCst);
}

pub fn fake_library() -> NativeLibrary {
    let api = InchiApi {
        get_struct_from_inchi: fake_get_struct_from_inchi,
        get_std_inchi: fake_get_std_inchi,
        get_inchi_from_inchi: fake_get_inchi_from_inchi,
        get_std_inchi_key: fake_get_std_inchi_key,
        check_inchi_key: fake_check_inchi_key,
        free_struct_from_inchi: fake_free_struct_from_inchi,
        free_inchi: fake_free_inchi,
    };
    unsafe { NativeLibrary::from_api(api) }
}

/// Loads the toolkit named by `INCHIKIT_TEST_LIBRARY`, if set.
pub fn real_library() -> Option<NativeLibrary> {
    let path = env::var_os(REAL_LIBRARY_ENV)?;
    NativeLibrary::load(path).ok()
}

/// trans-1,2-difluoroethene as the toolkit returns it: heavy atoms only, implicit H
/// counted on the carbons, one double-bond stereo element.
pub fn difluoroethene_atoms() -> Vec<AtomRecord> {
    let mut c1 = AtomRecord::new("C").unwrap();
    c1.add_bond(1, BondType::Double, BondStereo2D::None).unwrap();
    c1.add_bond(2, BondType::Single, BondStereo2D::None).unwrap();
    c1.set_implicit_hydrogens(&[1, 0, 0, 0]).unwrap();

    let mut c2 = AtomRecord::new("C").unwrap();
    c2.add_bond(0, BondType::Double, BondStereo2D::None).unwrap();
    c2.add_bond(3, BondType::Single, BondStereo2D::None).unwrap();
    c2.set_implicit_hydrogens(&[1, 0, 0, 0]).unwrap();

    let mut f1 = AtomRecord::new("F").unwrap();
    f1.set_implicit_hydrogens(&[0, 0, 0, 0]).unwrap();
    let f2 = f1;

    vec![c1, c2, f1, f2]
}

pub fn difluoroethene_stereo() -> Vec<StereoRecord> {
    vec![StereoRecord::double_bond([2, 0, 1, 3], StereoParity::Even).unwrap()]
}

/// Marks a fake call as running and records any call that overlaps it.
struct InFlight;

impl InFlight {
    fn enter() -> Self {
        if IN_FLIGHT.swap(true, Ordering::SeqCst) {
            OVERLAPS.fetch_add(1, Ordering::SeqCst);
        }
        thread::yield_now();
        Self
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        IN_FLIGHT.store(false, Ordering::SeqCst);
    }
}

fn alloc_text(text: &str) -> *mut c_char {
    let block = unsafe { libc::malloc(text.len() + 1) }.cast::<c_char>();
    assert!(!block.is_null(), "fake library allocation failed");
    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), block, text.len());
        block.add(text.len()).write(0);
    }
    block
}

fn alloc_records<T: Copy>(records: &[T]) -> *mut T {
    if records.is_empty() {
        return ptr::null_mut();
    }
    let block = unsafe { libc::malloc(records.len() * size_of::<T>()) }.cast::<T>();
    assert!(!block.is_null(), "fake library allocation failed");
    unsafe { ptr::copy_nonoverlapping(records.as_ptr(), block, records.len()) };
    block
}

unsafe fn read_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

unsafe fn free_text(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe { libc::free(ptr.cast()) };
    }
}

unsafe extern "C" fn fake_get_struct_from_inchi(
    input: *mut RawStringInput,
    output: *mut RawStructOutput,
) -> c_int {
    let _call = InFlight::enter();
    let inchi = unsafe { read_text((*input).inchi) };
    let output = unsafe { &mut *output };
    *output = RawStructOutput::empty();

    if inchi != DIFLUOROETHENE {
        output.message = alloc_text("Not a recognized InChI string");
        output.log = alloc_text("Error 2 (no InChI; Not a recognized InChI string)");
        return 2;
    }

    let atoms = difluoroethene_atoms();
    let stereo = difluoroethene_stereo();
    output.atom = alloc_records(&atoms);
    output.num_atoms = atoms.len() as i16;
    output.stereo0d = alloc_records(&stereo);
    output.num_stereo0d = stereo.len() as i16;
    output.message = alloc_text("");
    output.log = alloc_text("Structure #1 parsed");
    0
}

/// Hill-order formula over the heavy atoms and explicit hydrogens.
fn hill_formula(atoms: &[AtomRecord]) -> String {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for atom in atoms {
        *counts.entry(atom.element()).or_default() += 1;
    }
    let mut formula = String::new();
    for leading in ["C", "H"] {
        if let Some(count) = counts.remove(leading) {
            push_element(&mut formula, leading, count);
        }
    }
    for (element, count) in counts {
        push_element(&mut formula, &element, count);
    }
    formula
}

fn push_element(formula: &mut String, element: &str, count: usize) {
    formula.push_str(element);
    if count > 1 {
        let _ = write!(formula, "{count}");
    }
}

fn sdf_text(atoms: &[AtomRecord]) -> String {
    let bonds: Vec<(usize, i16, i8)> = atoms
        .iter()
        .enumerate()
        .flat_map(|(i, atom)| atom.bonds().map(move |bond| (i, bond.neighbor, bond.bond_type)))
        .filter(|&(i, neighbor, _)| (i as i16) < neighbor)
        .collect();

    let mut text = String::from("Structure #1\n  InChI v1 SDfile Output\n\n");
    let _ = writeln!(
        text,
        "{:>3}{:>3}  0  0  0  0  0  0  0  0  1 V2000",
        atoms.len(),
        bonds.len()
    );
    for atom in atoms {
        let position = atom.position();
        let _ = writeln!(
            text,
            "{:>10.4}{:>10.4}{:>10.4} {:<3} 0  0  0     0  0  0  0  0  0",
            position.x,
            position.y,
            position.z,
            atom.element()
        );
    }
    for (i, neighbor, bond_type) in bonds {
        let _ = writeln!(text, "{:>3}{:>3}{:>3}  0  0  0  0", i + 1, neighbor + 1, bond_type);
    }
    text.push_str("M  END\n$$$$\n");
    text
}

unsafe extern "C" fn fake_get_std_inchi(input: *mut RawInput, output: *mut RawOutput) -> c_int {
    let _call = InFlight::enter();
    let input = unsafe { &*input };
    let output = unsafe { &mut *output };
    *output = RawOutput::empty();

    let atoms: &[AtomRecord] = if input.atom.is_null() || input.num_atoms <= 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(input.atom, input.num_atoms as usize) }
    };
    if atoms.is_empty() {
        output.message = alloc_text("No structural data has been provided");
        output.log = alloc_text("Error 2 (no InChI; No structural data has been provided)");
        return 2;
    }

    let options = unsafe { read_text(input.options) };
    let text = if options.contains("OutputSDF") {
        sdf_text(atoms)
    } else {
        format!("InChI=1S/{}", hill_formula(atoms))
    };
    output.inchi = alloc_text(&text);
    output.aux_info = alloc_text("AuxInfo=1/0");
    output.message = alloc_text("");
    output.log = alloc_text("Structure #1 converted");
    0
}

unsafe extern "C" fn fake_get_inchi_from_inchi(
    input: *mut RawStringInput,
    output: *mut RawOutput,
) -> c_int {
    let _call = InFlight::enter();
    let inchi = unsafe { read_text((*input).inchi) };
    let output = unsafe { &mut *output };
    *output = RawOutput::empty();

    if !inchi.starts_with("InChI=") {
        output.message = alloc_text("Not an InChI string");
        output.log = alloc_text("Error 2 (no InChI; Not an InChI string)");
        return 2;
    }
    output.inchi = alloc_text(&inchi);
    output.message = alloc_text("");
    output.log = alloc_text("InChI re-generated");
    0
}

unsafe extern "C" fn fake_get_std_inchi_key(inchi: *const c_char, key: *mut c_char) -> c_int {
    let _call = InFlight::enter();
    let inchi = unsafe { read_text(inchi) };
    let computed = match inchi.as_str() {
        "" => return 2,
        DIFLUOROETHENE => DIFLUOROETHENE_KEY,
        METHANE => METHANE_KEY,
        other if other.starts_with("InChI=") => return 1,
        _ => return 3,
    };
    unsafe {
        ptr::copy_nonoverlapping(computed.as_ptr().cast::<c_char>(), key, computed.len());
        key.add(computed.len()).write(0);
    }
    0
}

const CHECKSUM_WEIGHTS: [u32; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Checksum character of a 25-character legacy key, computed over its first 24.
fn legacy_checksum(key: &[u8]) -> u8 {
    let sum: u32 = key[..24]
        .iter()
        .filter(|&&c| c != b'-')
        .zip(CHECKSUM_WEIGHTS.iter().cycle())
        .map(|(&c, &w)| w * u32::from(c))
        .sum();
    b'A' + (sum % 26) as u8
}

fn check_key(key: &[u8]) -> c_int {
    match key.len() {
        25 => {
            let layout_ok = key[14] == b'-'
                && key
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != 14)
                    .all(|(_, c)| c.is_ascii_uppercase())
                && [0, 3, 6, 9, 15, 18].iter().all(|&i| key[i] != b'E');
            if !layout_ok {
                2
            } else if legacy_checksum(key) != key[24] {
                3
            } else {
                0
            }
        }
        27 => {
            let layout_ok = key[14] == b'-'
                && key[25] == b'-'
                && key
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != 14 && i != 25)
                    .all(|(_, c)| c.is_ascii_uppercase());
            if layout_ok { 0 } else { 2 }
        }
        _ => 1,
    }
}

unsafe extern "C" fn fake_check_inchi_key(key: *const c_char) -> c_int {
    let _call = InFlight::enter();
    let key = unsafe { read_text(key) };
    check_key(key.as_bytes())
}

unsafe extern "C" fn fake_free_struct_from_inchi(output: *mut RawStructOutput) {
    let _call = InFlight::enter();
    let output = unsafe { &mut *output };
    unsafe {
        if !output.atom.is_null() {
            libc::free(output.atom.cast());
        }
        if !output.stereo0d.is_null() {
            libc::free(output.stereo0d.cast());
        }
        free_text(output.message);
        free_text(output.log);
    }
    *output = RawStructOutput::empty();
    STRUCTURE_RELEASES.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn fake_free_inchi(output: *mut RawOutput) {
    let _call = InFlight::enter();
    let output = unsafe { &mut *output };
    unsafe {
        free_text(output.inchi);
        free_text(output.aux_info);
        free_text(output.message);
        free_text(output.log);
    }
    *output = RawOutput::empty();
    STRING_RELEASES.fetch_add(1, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_checksum_matches_known_keys() {
        assert_eq!(legacy_checksum(LEGACY_KEY.as_bytes()), b'V');
        assert_eq!(check_key(b"YMKUERMSEJFJHY-XIXRPRMCBM"), 0);
    }

    #[test]
    fn standard_keys_pass_layout_check() {
        assert_eq!(check_key(DIFLUOROETHENE_KEY.as_bytes()), 0);
        assert_eq!(check_key(b"WFLOTYSKFUPZQB-OWOJBTEDSA_N"), 2);
    }

    #[test]
    fn hill_formula_orders_carbon_first() {
        assert_eq!(hill_formula(&difluoroethene_atoms()), "C2F2");
    }

    #[test]
    fn sdf_text_lists_each_bond_once() {
        let text = sdf_text(&difluoroethene_atoms());
        assert!(text.contains("  4  3  0"));
        assert!(text.ends_with("M  END\n$$$$\n"));
    }
}
