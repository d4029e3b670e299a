//! Typed views of the integer status codes returned by the native entry points.
//!
//! Each type keeps the raw integer available, so a code the library adds in a later
//! release is still reported faithfully instead of being folded into a catch-all.

use std::fmt;

/// Result of the identifier and structure conversions (`inchi_Ret`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnCode {
    Skip,
    EndOfFile,
    Okay,
    Warning,
    Error,
    Fatal,
    Unknown,
    /// The library was re-entered while a call was in progress.
    Busy,
    Unrecognized(i32),
}

impl ReturnCode {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            -2 => Self::Skip,
            -1 => Self::EndOfFile,
            0 => Self::Okay,
            1 => Self::Warning,
            2 => Self::Error,
            3 => Self::Fatal,
            4 => Self::Unknown,
            5 => Self::Busy,
            other => Self::Unrecognized(other),
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Self::Skip => -2,
            Self::EndOfFile => -1,
            Self::Okay => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::Fatal => 3,
            Self::Unknown => 4,
            Self::Busy => 5,
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Skip => "SKIP",
            Self::EndOfFile => "EOF_NO_STRUCT_DATA",
            Self::Okay => "OKAY",
            Self::Warning => "OKAY_WARNING(S)_ISSUED",
            Self::Error => "ERROR_NO_VAL_RETURNED",
            Self::Fatal => "FATAL_ERROR",
            Self::Unknown => "UNKNOWN ERROR",
            Self::Busy => "LIBRARY_BUSY",
            Self::Unrecognized(_) => "UNRECOGNIZED",
        }
    }

    /// `true` when the output payload is usable (okay, possibly with warnings).
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Okay | Self::Warning)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

/// Result of key generation (`INCHIKEY_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStatus {
    Okay,
    UnknownError,
    EmptyInput,
    NotInchiInput,
    NotEnoughMemory,
    ErrorInFlagChar,
    Unrecognized(i32),
}

impl KeyStatus {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Okay,
            1 => Self::UnknownError,
            2 => Self::EmptyInput,
            3 => Self::NotInchiInput,
            4 => Self::NotEnoughMemory,
            5 => Self::ErrorInFlagChar,
            other => Self::Unrecognized(other),
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Self::Okay => 0,
            Self::UnknownError => 1,
            Self::EmptyInput => 2,
            Self::NotInchiInput => 3,
            Self::NotEnoughMemory => 4,
            Self::ErrorInFlagChar => 5,
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Okay => "OKAY",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::NotInchiInput => "NOT_INCHI_INPUT",
            Self::NotEnoughMemory => "NOT_ENOUGH_MEMORY",
            Self::ErrorInFlagChar => "ERROR_IN_FLAG_CHAR",
            Self::Unrecognized(_) => "UNRECOGNIZED",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Okay)
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

/// Result of a key validity check (`INCHIKEY_VALID_KEY` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCheck {
    Valid,
    InvalidLength,
    InvalidLayout,
    InvalidChecksum,
    Unrecognized(i32),
}

impl KeyCheck {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Valid,
            1 => Self::InvalidLength,
            2 => Self::InvalidLayout,
            3 => Self::InvalidChecksum,
            other => Self::Unrecognized(other),
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Self::Valid => 0,
            Self::InvalidLength => 1,
            Self::InvalidLayout => 2,
            Self::InvalidChecksum => 3,
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Valid => "VALID_KEY",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidLayout => "INVALID_LAYOUT",
            Self::InvalidChecksum => "INVALID_CHECKSUM",
            Self::Unrecognized(_) => "UNRECOGNIZED",
        }
    }

    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for KeyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_codes_map_every_documented_value() {
        for raw in -2..=5 {
            let code = ReturnCode::from_raw(raw);
            assert!(!matches!(code, ReturnCode::Unrecognized(_)));
            assert_eq!(code.raw(), raw);
        }
        assert_eq!(ReturnCode::from_raw(0).name(), "OKAY");
        assert_eq!(ReturnCode::from_raw(1).name(), "OKAY_WARNING(S)_ISSUED");
        assert_eq!(ReturnCode::from_raw(4).name(), "UNKNOWN ERROR");
        assert_eq!(ReturnCode::from_raw(5), ReturnCode::Busy);
    }

    #[test]
    fn unrecognized_codes_keep_their_raw_value() {
        assert_eq!(ReturnCode::from_raw(42), ReturnCode::Unrecognized(42));
        assert_eq!(ReturnCode::from_raw(42).raw(), 42);
        assert_eq!(KeyStatus::from_raw(-7).raw(), -7);
        assert_eq!(KeyCheck::from_raw(9), KeyCheck::Unrecognized(9));
    }

    #[test]
    fn only_okay_and_warning_are_successful_conversions() {
        assert!(ReturnCode::Okay.is_success());
        assert!(ReturnCode::Warning.is_success());
        for code in [
            ReturnCode::Skip,
            ReturnCode::EndOfFile,
            ReturnCode::Error,
            ReturnCode::Fatal,
            ReturnCode::Unknown,
            ReturnCode::Busy,
        ] {
            assert!(!code.is_success(), "{code} must not count as success");
        }
    }

    #[test]
    fn key_vocabularies_use_native_names() {
        assert_eq!(KeyStatus::from_raw(3).name(), "NOT_INCHI_INPUT");
        assert_eq!(KeyStatus::from_raw(5).name(), "ERROR_IN_FLAG_CHAR");
        assert_eq!(KeyCheck::from_raw(2).name(), "INVALID_LAYOUT");
        assert_eq!(format!("{}", KeyCheck::InvalidChecksum), "INVALID_CHECKSUM (3)");
    }
}
