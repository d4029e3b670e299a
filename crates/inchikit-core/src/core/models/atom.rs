use super::topology::{BondEntry, BondStereo2D, BondType, RadicalKind};
use super::{RecordError, check_atom_indices, fixed_array};
use crate::core::constants::{
    ATOM_ELEMENT_LEN, IMPLICIT_H_SLOTS, ISOTOPIC_SHIFT_FLAG, ISOTOPIC_SHIFT_MAX, MAX_ATOM_INDEX,
    MAX_BONDS,
};
use nalgebra::Point3;
use std::ffi::c_char;
use std::mem::{align_of, offset_of, size_of};

/// One atom as the native toolkit lays it out (`inchi_Atom`).
///
/// The record is a value type. Appending it to a `StructuralInput` copies its bytes
/// into the native atom buffer; it has no lifetime of its own after that.
///
/// Every array is stored inline with its native length, so a record read from a
/// native buffer and a record built here are interchangeable.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtomRecord {
    x: f64,
    y: f64,
    z: f64,
    neighbors: [i16; MAX_BONDS],
    bond_types: [i8; MAX_BONDS],
    bond_stereo: [i8; MAX_BONDS],
    element: [c_char; ATOM_ELEMENT_LEN],
    num_bonds: i16,
    /// `[0]` non-isotopic (−1: let the toolkit add implicit H), `[1..4]` 1H, 2H, 3H.
    implicit_hydrogens: [i8; IMPLICIT_H_SLOTS],
    isotopic_mass: i16,
    radical: i8,
    charge: i8,
}

const _: () = {
    assert!(size_of::<AtomRecord>() == 120);
    assert!(align_of::<AtomRecord>() == 8);
    assert!(offset_of!(AtomRecord, x) == 0);
    assert!(offset_of!(AtomRecord, y) == 8);
    assert!(offset_of!(AtomRecord, z) == 16);
    assert!(offset_of!(AtomRecord, neighbors) == 24);
    assert!(offset_of!(AtomRecord, bond_types) == 64);
    assert!(offset_of!(AtomRecord, bond_stereo) == 84);
    assert!(offset_of!(AtomRecord, element) == 104);
    assert!(offset_of!(AtomRecord, num_bonds) == 110);
    assert!(offset_of!(AtomRecord, implicit_hydrogens) == 112);
    assert!(offset_of!(AtomRecord, isotopic_mass) == 116);
    assert!(offset_of!(AtomRecord, radical) == 118);
    assert!(offset_of!(AtomRecord, charge) == 119);
};

impl AtomRecord {
    /// Creates an atom at the origin and leaves the implicit hydrogen count to the toolkit.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if `element` is longer than 6 bytes or contains NUL.
    pub fn new(element: &str) -> Result<Self, RecordError> {
        let mut atom = Self::default();
        atom.set_element(element)?;
        atom.implicit_hydrogens[0] = -1;
        Ok(atom)
    }

    /// Creates an atom at the given coordinates with toolkit-inferred implicit hydrogens.
    pub fn with_position(element: &str, x: f64, y: f64, z: f64) -> Result<Self, RecordError> {
        let mut atom = Self::new(element)?;
        atom.set_position(Point3::new(x, y, z));
        Ok(atom)
    }

    /// The element symbol, read up to the first NUL or the full 6-byte width.
    pub fn element(&self) -> String {
        let bytes: Vec<u8> = self
            .element
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn set_element(&mut self, symbol: &str) -> Result<(), RecordError> {
        if symbol.len() > ATOM_ELEMENT_LEN {
            return Err(RecordError::ElementTooLong {
                symbol: symbol.to_string(),
                max: ATOM_ELEMENT_LEN,
            });
        }
        if symbol.as_bytes().contains(&0) {
            return Err(RecordError::ElementContainsNul);
        }
        self.element = [0; ATOM_ELEMENT_LEN];
        for (slot, byte) in self.element.iter_mut().zip(symbol.bytes()) {
            *slot = byte as c_char;
        }
        Ok(())
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, position: Point3<f64>) {
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
    }

    /// Sets the coordinates from a slice that must hold exactly `[x, y, z]`.
    pub fn set_coords(&mut self, coords: &[f64]) -> Result<(), RecordError> {
        let [x, y, z]: [f64; 3] = fixed_array(coords, "coords")?;
        self.set_position(Point3::new(x, y, z));
        Ok(())
    }

    pub fn neighbors(&self) -> &[i16; MAX_BONDS] {
        &self.neighbors
    }

    /// Replaces all 20 neighbor slots. Every slot, used or not, must be a valid index.
    pub fn set_neighbors(&mut self, neighbors: &[i16]) -> Result<(), RecordError> {
        let neighbors: [i16; MAX_BONDS] = fixed_array(neighbors, "neighbors")?;
        check_atom_indices(&neighbors, "neighbors")?;
        self.neighbors = neighbors;
        Ok(())
    }

    pub fn bond_types(&self) -> &[i8; MAX_BONDS] {
        &self.bond_types
    }

    pub fn set_bond_types(&mut self, bond_types: &[i8]) -> Result<(), RecordError> {
        self.bond_types = fixed_array(bond_types, "bond_types")?;
        Ok(())
    }

    pub fn bond_stereo(&self) -> &[i8; MAX_BONDS] {
        &self.bond_stereo
    }

    pub fn set_bond_stereo(&mut self, bond_stereo: &[i8]) -> Result<(), RecordError> {
        self.bond_stereo = fixed_array(bond_stereo, "bond_stereo")?;
        Ok(())
    }

    pub fn num_bonds(&self) -> i16 {
        self.num_bonds
    }

    pub fn set_num_bonds(&mut self, num_bonds: i16) -> Result<(), RecordError> {
        if !(0..=MAX_BONDS as i16).contains(&num_bonds) {
            return Err(RecordError::OutOfRange {
                field: "num_bonds",
                value: num_bonds.into(),
                reason: "an atom carries between 0 and 20 bonds",
            });
        }
        self.num_bonds = num_bonds;
        Ok(())
    }

    /// Appends a bond in the next free slot and increments the bond count.
    pub fn add_bond(
        &mut self,
        neighbor: i16,
        bond_type: BondType,
        stereo: BondStereo2D,
    ) -> Result<(), RecordError> {
        let slot = self.num_bonds.max(0) as usize;
        if slot >= MAX_BONDS {
            return Err(RecordError::OutOfRange {
                field: "num_bonds",
                value: (slot + 1) as i64,
                reason: "an atom carries at most 20 bonds",
            });
        }
        if !(0..=MAX_ATOM_INDEX).contains(&neighbor) {
            return Err(RecordError::IndexOutOfRange {
                field: "neighbors",
                value: neighbor,
                min: 0,
                max: MAX_ATOM_INDEX,
            });
        }
        self.neighbors[slot] = neighbor;
        self.bond_types[slot] = bond_type.as_raw();
        self.bond_stereo[slot] = stereo.as_raw();
        self.num_bonds = slot as i16 + 1;
        Ok(())
    }

    /// The populated bond slots, in slot order.
    pub fn bonds(&self) -> impl Iterator<Item = BondEntry> + '_ {
        let count = (self.num_bonds.max(0) as usize).min(MAX_BONDS);
        (0..count).map(move |i| BondEntry {
            neighbor: self.neighbors[i],
            bond_type: self.bond_types[i],
            stereo: self.bond_stereo[i],
        })
    }

    pub fn implicit_hydrogens(&self) -> &[i8; IMPLICIT_H_SLOTS] {
        &self.implicit_hydrogens
    }

    /// Replaces the four implicit hydrogen counts (non-isotopic, protium, deuterium, tritium).
    pub fn set_implicit_hydrogens(&mut self, counts: &[i8]) -> Result<(), RecordError> {
        self.implicit_hydrogens = fixed_array(counts, "implicit_hydrogens")?;
        Ok(())
    }

    /// Sets only the non-isotopic implicit hydrogen count; −1 lets the toolkit decide.
    pub fn set_implicit_hydrogen_count(&mut self, count: i8) {
        self.implicit_hydrogens[0] = count;
    }

    /// The raw isotopic mass field as the toolkit stores it.
    pub fn isotopic_mass(&self) -> i16 {
        self.isotopic_mass
    }

    pub fn set_isotopic_mass(&mut self, isotopic_mass: i16) {
        self.isotopic_mass = isotopic_mass;
    }

    /// Encodes `shift` (isotopic mass minus average atomic mass) with the shift flag.
    pub fn set_isotopic_shift(&mut self, shift: i16) -> Result<(), RecordError> {
        if !(-ISOTOPIC_SHIFT_MAX..=ISOTOPIC_SHIFT_MAX).contains(&shift) {
            return Err(RecordError::OutOfRange {
                field: "isotopic_mass",
                value: shift.into(),
                reason: "isotopic shift must lie within ±100",
            });
        }
        self.isotopic_mass = ISOTOPIC_SHIFT_FLAG + shift;
        Ok(())
    }

    /// Decodes the isotopic mass field if it holds a flag-encoded shift.
    pub fn isotopic_shift(&self) -> Option<i16> {
        let shift = self.isotopic_mass.checked_sub(ISOTOPIC_SHIFT_FLAG)?;
        (-ISOTOPIC_SHIFT_MAX..=ISOTOPIC_SHIFT_MAX)
            .contains(&shift)
            .then_some(shift)
    }

    pub fn radical(&self) -> Option<RadicalKind> {
        RadicalKind::from_raw(self.radical)
    }

    pub fn radical_raw(&self) -> i8 {
        self.radical
    }

    pub fn set_radical(&mut self, radical: RadicalKind) {
        self.radical = radical.as_raw();
    }

    pub fn charge(&self) -> i8 {
        self.charge
    }

    pub fn set_charge(&mut self, charge: i8) {
        self.charge = charge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::slice;

    fn as_bytes(atom: &AtomRecord) -> &[u8] {
        let base = (atom as *const AtomRecord).cast::<u8>();
        unsafe { slice::from_raw_parts(base, size_of::<AtomRecord>()) }
    }

    #[test]
    fn new_atom_defers_implicit_hydrogens_to_toolkit() {
        let atom = AtomRecord::new("C").unwrap();
        assert_eq!(atom.element(), "C");
        assert_eq!(atom.implicit_hydrogens(), &[-1, 0, 0, 0]);
        assert_eq!(atom.num_bonds(), 0);
        assert_eq!(atom.position(), Point3::origin());
    }

    #[test]
    fn element_symbol_of_six_bytes_is_stored_without_terminator() {
        let atom = AtomRecord::new("Abcdef").unwrap();
        assert_eq!(atom.element(), "Abcdef");
        assert_eq!(&as_bytes(&atom)[104..110], b"Abcdef");
    }

    #[test]
    fn element_symbol_longer_than_six_bytes_is_rejected() {
        assert!(matches!(
            AtomRecord::new("Abcdefg"),
            Err(RecordError::ElementTooLong { max: 6, .. })
        ));
        assert_eq!(
            AtomRecord::new("C\0").unwrap_err(),
            RecordError::ElementContainsNul
        );
    }

    #[test]
    fn set_element_clears_previous_symbol() {
        let mut atom = AtomRecord::new("Cl").unwrap();
        atom.set_element("O").unwrap();
        assert_eq!(atom.element(), "O");
        assert_eq!(&as_bytes(&atom)[104..110], &[b'O', 0, 0, 0, 0, 0]);
    }

    #[test]
    fn neighbors_out_of_range_are_rejected() {
        let mut atom = AtomRecord::new("C").unwrap();

        let mut too_high = [0i16; MAX_BONDS];
        too_high[5] = 1024;
        assert!(matches!(
            atom.set_neighbors(&too_high),
            Err(RecordError::IndexOutOfRange { value: 1024, .. })
        ));

        let mut negative = [0i16; MAX_BONDS];
        negative[19] = -3;
        assert!(matches!(
            atom.set_neighbors(&negative),
            Err(RecordError::IndexOutOfRange { value: -3, .. })
        ));

        assert_eq!(atom.neighbors(), &[0; MAX_BONDS]);
    }

    #[test]
    fn neighbors_within_range_are_stored() {
        let mut atom = AtomRecord::new("C").unwrap();
        let mut neighbors = [0i16; MAX_BONDS];
        neighbors[0] = 1023;
        neighbors[1] = 7;
        atom.set_neighbors(&neighbors).unwrap();
        assert_eq!(atom.neighbors()[0], 1023);
        assert_eq!(atom.neighbors()[1], 7);
    }

    #[test]
    fn fixed_arrays_with_wrong_length_are_rejected() {
        let mut atom = AtomRecord::new("N").unwrap();

        assert!(matches!(
            atom.set_neighbors(&[1, 2, 3]),
            Err(RecordError::WrongLength {
                field: "neighbors",
                expected: 20,
                actual: 3
            })
        ));
        assert!(matches!(
            atom.set_bond_types(&[1; 21]),
            Err(RecordError::WrongLength {
                field: "bond_types",
                ..
            })
        ));
        assert!(matches!(
            atom.set_bond_stereo(&[]),
            Err(RecordError::WrongLength {
                field: "bond_stereo",
                ..
            })
        ));
        assert!(matches!(
            atom.set_implicit_hydrogens(&[0, 0, 0]),
            Err(RecordError::WrongLength {
                field: "implicit_hydrogens",
                expected: 4,
                ..
            })
        ));
        assert!(matches!(
            atom.set_coords(&[1.0, 2.0]),
            Err(RecordError::WrongLength {
                field: "coords",
                expected: 3,
                ..
            })
        ));
    }

    #[test]
    fn set_coords_updates_position() {
        let mut atom = AtomRecord::new("O").unwrap();
        atom.set_coords(&[1.5, -2.0, 0.25]).unwrap();
        assert_eq!(atom.position(), Point3::new(1.5, -2.0, 0.25));
    }

    #[test]
    fn add_bond_fills_slots_in_order() {
        let mut atom = AtomRecord::new("C").unwrap();
        atom.add_bond(1, BondType::Double, BondStereo2D::None).unwrap();
        atom.add_bond(2, BondType::Single, BondStereo2D::Single1Up).unwrap();

        let bonds: Vec<_> = atom.bonds().collect();
        assert_eq!(atom.num_bonds(), 2);
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0].neighbor, 1);
        assert_eq!(bonds[0].kind(), Some(BondType::Double));
        assert_eq!(bonds[1].stereo_2d(), Some(BondStereo2D::Single1Up));
    }

    #[test]
    fn add_bond_rejects_twenty_first_bond_and_bad_neighbor() {
        let mut atom = AtomRecord::new("C").unwrap();
        assert!(matches!(
            atom.add_bond(2000, BondType::Single, BondStereo2D::None),
            Err(RecordError::IndexOutOfRange { value: 2000, .. })
        ));
        for i in 0..MAX_BONDS as i16 {
            atom.add_bond(i, BondType::Single, BondStereo2D::None).unwrap();
        }
        assert!(matches!(
            atom.add_bond(0, BondType::Single, BondStereo2D::None),
            Err(RecordError::OutOfRange {
                field: "num_bonds",
                ..
            })
        ));
        assert_eq!(atom.num_bonds(), 20);
    }

    #[test]
    fn set_num_bonds_enforces_range() {
        let mut atom = AtomRecord::new("C").unwrap();
        assert!(atom.set_num_bonds(20).is_ok());
        assert!(atom.set_num_bonds(21).is_err());
        assert!(atom.set_num_bonds(-1).is_err());
        assert_eq!(atom.num_bonds(), 20);
    }

    #[test]
    fn isotopic_shift_is_offset_encoded() {
        let mut atom = AtomRecord::new("C").unwrap();
        assert_eq!(atom.isotopic_shift(), None);

        atom.set_isotopic_shift(1).unwrap();
        assert_eq!(atom.isotopic_mass(), 10001);
        assert_eq!(atom.isotopic_shift(), Some(1));

        atom.set_isotopic_shift(-100).unwrap();
        assert_eq!(atom.isotopic_mass(), 9900);

        assert!(atom.set_isotopic_shift(101).is_err());
        assert_eq!(atom.isotopic_shift(), Some(-100));
    }

    #[test]
    fn isotopic_shift_is_none_for_masses_far_below_the_flag() {
        let mut atom = AtomRecord::new("C").unwrap();
        atom.set_isotopic_mass(i16::MIN);
        assert_eq!(atom.isotopic_shift(), None);

        atom.set_isotopic_mass(-22769);
        assert_eq!(atom.isotopic_shift(), None);

        atom.set_isotopic_mass(13);
        assert_eq!(atom.isotopic_shift(), None);
    }

    #[test]
    fn radical_and_charge_are_stored_as_signed_bytes() {
        let mut atom = AtomRecord::new("C").unwrap();
        atom.set_radical(RadicalKind::Doublet);
        atom.set_charge(-2);

        let bytes = as_bytes(&atom);
        assert_eq!(bytes[118] as i8, 2);
        assert_eq!(bytes[119] as i8, -2);
        assert_eq!(atom.radical(), Some(RadicalKind::Doublet));
        assert_eq!(atom.charge(), -2);
    }

    #[test]
    fn coordinates_and_counts_land_at_native_offsets() {
        let mut atom = AtomRecord::with_position("N", 1.0, 2.0, 3.0).unwrap();
        atom.add_bond(513, BondType::Triple, BondStereo2D::None).unwrap();

        let bytes = as_bytes(&atom);
        assert_eq!(&bytes[0..8], &1.0f64.to_ne_bytes());
        assert_eq!(&bytes[16..24], &3.0f64.to_ne_bytes());
        assert_eq!(&bytes[24..26], &513i16.to_ne_bytes());
        assert_eq!(bytes[64] as i8, 3);
        assert_eq!(&bytes[110..112], &1i16.to_ne_bytes());
        assert_eq!(bytes[112] as i8, -1);
    }
}
