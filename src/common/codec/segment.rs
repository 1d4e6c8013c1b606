use super::types::{alphanumeric_digit, numeric_digit, Mode};
use crate::common::bit_utils::BitStream;
use crate::common::error::{QRError, QRResult};

// Segment encoder
//------------------------------------------------------------------------------

/// Packs text into the ordered bit chunks of a single mode segment.
pub trait SegmentEncoder {
    fn encode(&self, text: &str) -> QRResult<Vec<BitStream>>;
}

pub struct NumericEncoder;

pub struct AlphanumericEncoder;

pub struct ByteEncoder;

impl Mode {
    pub fn encoder(self) -> &'static dyn SegmentEncoder {
        match self {
            Self::Numeric => &NumericEncoder,
            Self::Alphanumeric => &AlphanumericEncoder,
            Self::Byte => &ByteEncoder,
        }
    }

    pub fn encode(self, text: &str) -> QRResult<Vec<BitStream>> {
        self.encoder().encode(text)
    }
}

fn chunk(bits: u16, size: usize) -> QRResult<BitStream> {
    let mut bs = BitStream::with_capacity(size);
    bs.push_bits(bits, size)?;
    Ok(bs)
}

// Groups of 3 digits in 10 bits, trailing 2 in 7, trailing 1 in 4
impl SegmentEncoder for NumericEncoder {
    fn encode(&self, text: &str) -> QRResult<Vec<BitStream>> {
        let digits = text
            .chars()
            .map(|c| numeric_digit(c).ok_or(QRError::InvalidChar(c)))
            .collect::<QRResult<Vec<_>>>()?;
        digits
            .chunks(3)
            .map(|g| {
                let val = g.iter().fold(0_u16, |n, d| n * 10 + *d);
                chunk(val, NUMERIC_GROUP_BITS[g.len()])
            })
            .collect()
    }
}

// Pairs as 45 * first + second in 11 bits, trailing single in 6
impl SegmentEncoder for AlphanumericEncoder {
    fn encode(&self, text: &str) -> QRResult<Vec<BitStream>> {
        let digits = text
            .chars()
            .map(|c| alphanumeric_digit(c).ok_or(QRError::InvalidChar(c)))
            .collect::<QRResult<Vec<_>>>()?;
        digits
            .chunks(2)
            .map(|p| {
                let val = p.iter().fold(0_u16, |n, d| n * 45 + *d);
                chunk(val, ALPHANUMERIC_GROUP_BITS[p.len()])
            })
            .collect()
    }
}

impl SegmentEncoder for ByteEncoder {
    fn encode(&self, text: &str) -> QRResult<Vec<BitStream>> {
        text.bytes().map(|b| chunk(b as u16, 8)).collect()
    }
}


// Global constants
//------------------------------------------------------------------------------

// Indexed by group length
static NUMERIC_GROUP_BITS: [usize; 4] = [0, 4, 7, 10];
static ALPHANUMERIC_GROUP_BITS: [usize; 3] = [0, 6, 11];
