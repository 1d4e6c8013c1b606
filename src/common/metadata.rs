use std::ops::Deref;
use std::str::FromStr;

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::version_db::{lookup, version_count, VersionInfo};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

// Version
//------------------------------------------------------------------------------

/// Handle to a version present in the bundled capacity table.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub fn new(number: usize) -> QRResult<Self> {
        lookup(number).map(|info| Self(info.number))
    }

    /// Supported versions in ascending order.
    pub fn iter() -> impl Iterator<Item = Version> {
        (1..=version_count()).map(Version)
    }

    pub fn number(self) -> usize {
        self.0
    }

    pub fn info(self) -> &'static VersionInfo {
        // Only constructed from a successful lookup
        &super::version_db::VERSION_DB[self.0 - 1]
    }

    pub fn width(self) -> usize {
        self.info().width
    }

    pub fn char_capacity(self, mode: Mode, ecl: ECLevel) -> usize {
        let cap = &self.info().char_capacity[ecl as usize];
        match mode {
            Mode::Numeric => cap.numeric,
            Mode::Alphanumeric => cap.alphanumeric,
            Mode::Byte => cap.byte,
        }
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.info().data_bits[ecl as usize]
    }

    pub fn mode_bits(self) -> usize {
        MODE_INDICATOR_BITS
    }

    pub fn char_cnt_bits(self, mode: Mode) -> QRResult<usize> {
        char_cnt_bits(self.0, mode)
    }
}

/// Width of the character count indicator for a version number in 1..=40.
pub fn char_cnt_bits(number: usize, mode: Mode) -> QRResult<usize> {
    let range = match number {
        1..=9 => 0,
        10..=26 => 1,
        27..=40 => 2,
        _ => return Err(QRError::UnknownVersion),
    };
    let idx = match mode {
        Mode::Numeric => 0,
        Mode::Alphanumeric => 1,
        Mode::Byte => 2,
    };
    Ok(CHAR_CNT_BITS[range][idx])
}


// Global constants
//------------------------------------------------------------------------------

pub static MODE_INDICATOR_BITS: usize = 4;

// Rows: versions 1-9, 10-26, 27-40. Columns: numeric, alphanumeric, byte.
static CHAR_CNT_BITS: [[usize; 3]; 3] = [[10, 9, 8], [12, 11, 16], [14, 13, 16]];
