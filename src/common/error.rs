use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Input
    CapacityExceeded,
    InvalidChar(char),
    UnknownVersion,
    InvalidECLevel,

    // Bit packing
    ValueOutOfRange,
    WidthOutOfRange,
    IndicatorOverflow,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::CapacityExceeded => f.write_str("Data too long for any supported version"),
            Self::InvalidChar(c) => write!(f, "Invalid character {c:?} for selected mode"),
            Self::UnknownVersion => f.write_str("Unknown version"),
            Self::InvalidECLevel => f.write_str("Invalid error correction level"),
            Self::ValueOutOfRange => f.write_str("Value doesn't fit in bit width"),
            Self::WidthOutOfRange => f.write_str("Bit width out of range"),
            Self::IndicatorOverflow => f.write_str("Character count doesn't fit in indicator"),
        }
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
