use std::cmp::Ordering;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

impl PartialOrd for Mode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Narrower modes compare less
impl Ord for Mode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Mode {
    fn rank(self) -> u8 {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
        }
    }

    /// 4-bit mode indicator.
    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Narrowest mode that covers every character of `text`. Byte is the
    /// fallback, so this never fails.
    pub fn select(text: &str) -> Self {
        MODES.iter().copied().find(|m| text.chars().all(|c| m.contains(c))).unwrap_or(Self::Byte)
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit(),
            Self::Alphanumeric => alphanumeric_digit(c).is_some(),
            Self::Byte => true,
        }
    }

    /// Bit length of the packed data for `len` characters (bytes, for Byte
    /// mode), excluding the header.
    pub fn encoded_len(self, len: usize) -> usize {
        match self {
            Self::Numeric => (len / 3) * 10 + [0, 4, 7][len % 3],
            Self::Alphanumeric => (len / 2) * 11 + (len % 2) * 6,
            Self::Byte => len * 8,
        }
    }
}

#[inline]
pub fn numeric_digit(c: char) -> Option<u16> {
    c.to_digit(10).map(|d| d as u16)
}

#[inline]
pub fn alphanumeric_digit(c: char) -> Option<u16> {
    ALPHANUMERIC_CHARSET.iter().position(|&a| a == c).map(|i| i as u16)
}


// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Ordered narrowest first
pub static MODES: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];

pub static ALPHANUMERIC_CHARSET: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];
