use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bond type stored in `AtomRecord::bond_types` (`inchi_BondType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum BondType {
    #[default]
    None = 0,
    Single = 1,
    Double = 2,
    Triple = 3,
    /// Alternating (aromatic) bond. The toolkit discourages its use in input.
    Alternating = 4,
}

impl BondType {
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            4 => Some(Self::Alternating),
            _ => None,
        }
    }
}

/// 2-D stereo marker of a bond (`inchi_BondStereo2D`).
///
/// Positive values mean the narrow end of the wedge points at the atom that owns the
/// bond entry; negative values mean it points at the neighbor. Only used when all
/// neighbors share the owning atom's z coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum BondStereo2D {
    #[default]
    None = 0,
    Single1Up = 1,
    Single1Either = 4,
    Single1Down = 6,
    Single2Up = -1,
    Single2Either = -4,
    Single2Down = -6,
    /// Unknown double bond geometry.
    DoubleEither = 3,
}

impl BondStereo2D {
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Single1Up),
            4 => Some(Self::Single1Either),
            6 => Some(Self::Single1Down),
            -1 => Some(Self::Single2Up),
            -4 => Some(Self::Single2Either),
            -6 => Some(Self::Single2Down),
            3 => Some(Self::DoubleEither),
            _ => None,
        }
    }
}

/// Radical state stored in `AtomRecord::radical` (`inchi_Radical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum RadicalKind {
    #[default]
    None = 0,
    Singlet = 1,
    Doublet = 2,
    Triplet = 3,
}

impl RadicalKind {
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Singlet),
            2 => Some(Self::Doublet),
            3 => Some(Self::Triplet),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond type string")]
pub struct ParseBondTypeError;

impl FromStr for BondType {
    type Err = ParseBondTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "none" => Ok(Self::None),
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "4" | "ar" | "alternating" | "altern" => Ok(Self::Alternating),
            _ => Err(ParseBondTypeError),
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::None => "None",
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Alternating => "Alternating",
            }
        )
    }
}

/// One populated bond slot of an atom record, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondEntry {
    pub neighbor: i16,
    pub bond_type: i8,
    pub stereo: i8,
}

impl BondEntry {
    pub fn kind(&self) -> Option<BondType> {
        BondType::from_raw(self.bond_type)
    }

    pub fn stereo_2d(&self) -> Option<BondStereo2D> {
        BondStereo2D::from_raw(self.stereo)
    }
}
