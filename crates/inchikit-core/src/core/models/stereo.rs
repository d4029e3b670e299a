use super::{RecordError, check_atom_indices, fixed_array};
use crate::core::constants::{MAX_ATOM_INDEX, NO_ATOM, STEREO_NEIGHBORS};
use std::mem::{align_of, offset_of, size_of};

/// Geometry described by a 0-D stereo element (`inchi_StereoType0D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum StereoKind {
    #[default]
    None = 0,
    DoubleBond = 1,
    Tetrahedral = 2,
    Allene = 3,
}

impl StereoKind {
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::DoubleBond),
            2 => Some(Self::Tetrahedral),
            3 => Some(Self::Allene),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DoubleBond => "double-bond",
            Self::Tetrahedral => "tetrahedral",
            Self::Allene => "allene",
        }
    }
}

/// Parity of a 0-D stereo element (`inchi_StereoParity0D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum StereoParity {
    #[default]
    None = 0,
    Odd = 1,
    Even = 2,
    Unknown = 3,
    Undefined = 4,
}

impl StereoParity {
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Odd),
            2 => Some(Self::Even),
            3 => Some(Self::Unknown),
            4 => Some(Self::Undefined),
            _ => None,
        }
    }
}

/// One 0-D stereo element (`inchi_Stereo0D`).
///
/// Double-bond and allene elements carry no central atom (`NO_ATOM`); a tetrahedral
/// element must name one.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StereoRecord {
    neighbors: [i16; STEREO_NEIGHBORS],
    central_atom: i16,
    kind: i8,
    parity: i8,
}

const _: () = {
    assert!(size_of::<StereoRecord>() == 12);
    assert!(align_of::<StereoRecord>() == 2);
    assert!(offset_of!(StereoRecord, central_atom) == 8);
    assert!(offset_of!(StereoRecord, kind) == 10);
    assert!(offset_of!(StereoRecord, parity) == 11);
};

impl StereoRecord {
    /// Builds a stereo element after checking every index and the center/kind rule.
    ///
    /// # Errors
    ///
    /// - `WrongLength` unless `neighbors` holds exactly four indices.
    /// - `IndexOutOfRange` for any neighbor outside `[0, 1023]`, or a central atom
    ///   outside `[-1, 1023]`.
    /// - `InconsistentStereoCenter` if the central atom does not fit the kind.
    pub fn new(
        neighbors: &[i16],
        central_atom: i16,
        kind: StereoKind,
        parity: StereoParity,
    ) -> Result<Self, RecordError> {
        let neighbors: [i16; STEREO_NEIGHBORS] = fixed_array(neighbors, "neighbors")?;
        check_atom_indices(&neighbors, "neighbors")?;
        check_center(central_atom, kind)?;
        Ok(Self {
            neighbors,
            central_atom,
            kind: kind.as_raw(),
            parity: parity.as_raw(),
        })
    }

    /// Stereo double bond `n0-a=b-n3` given as `[n0, a, b, n3]`.
    pub fn double_bond(neighbors: [i16; 4], parity: StereoParity) -> Result<Self, RecordError> {
        Self::new(&neighbors, NO_ATOM, StereoKind::DoubleBond, parity)
    }

    pub fn tetrahedral(
        central_atom: i16,
        neighbors: [i16; 4],
        parity: StereoParity,
    ) -> Result<Self, RecordError> {
        Self::new(&neighbors, central_atom, StereoKind::Tetrahedral, parity)
    }

    pub fn allene(neighbors: [i16; 4], parity: StereoParity) -> Result<Self, RecordError> {
        Self::new(&neighbors, NO_ATOM, StereoKind::Allene, parity)
    }

    pub fn neighbors(&self) -> &[i16; STEREO_NEIGHBORS] {
        &self.neighbors
    }

    pub fn set_neighbors(&mut self, neighbors: &[i16]) -> Result<(), RecordError> {
        let neighbors: [i16; STEREO_NEIGHBORS] = fixed_array(neighbors, "neighbors")?;
        check_atom_indices(&neighbors, "neighbors")?;
        self.neighbors = neighbors;
        Ok(())
    }

    /// The central atom index, or `None` for `NO_ATOM`.
    pub fn central_atom(&self) -> Option<i16> {
        (self.central_atom != NO_ATOM).then_some(self.central_atom)
    }

    pub fn central_atom_raw(&self) -> i16 {
        self.central_atom
    }

    pub fn kind(&self) -> Option<StereoKind> {
        StereoKind::from_raw(self.kind)
    }

    pub fn kind_raw(&self) -> i8 {
        self.kind
    }

    pub fn parity(&self) -> Option<StereoParity> {
        StereoParity::from_raw(self.parity)
    }

    pub fn parity_raw(&self) -> i8 {
        self.parity
    }

    pub fn set_parity(&mut self, parity: StereoParity) {
        self.parity = parity.as_raw();
    }
}

fn check_center(central_atom: i16, kind: StereoKind) -> Result<(), RecordError> {
    if !(NO_ATOM..=MAX_ATOM_INDEX).contains(&central_atom) {
        return Err(RecordError::IndexOutOfRange {
            field: "central_atom",
            value: central_atom,
            min: NO_ATOM,
            max: MAX_ATOM_INDEX,
        });
    }
    match kind {
        StereoKind::DoubleBond | StereoKind::Allene if central_atom != NO_ATOM => {
            Err(RecordError::InconsistentStereoCenter {
                kind: kind.name(),
                requirement: "no central atom (-1)",
                central_atom,
            })
        }
        StereoKind::Tetrahedral if central_atom == NO_ATOM => {
            Err(RecordError::InconsistentStereoCenter {
                kind: kind.name(),
                requirement: "a central atom in [0, 1023]",
                central_atom,
            })
        }
        _ => Ok(()),
    }
}
