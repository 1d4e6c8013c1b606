use std::fmt::{Display, Error, Formatter};

use num_traits::PrimInt;

use super::error::{QRError, QRResult};

// Bit stream
//------------------------------------------------------------------------------

/// Append-only bit buffer. Bits are packed MSB first into bytes; the trailing
/// unused bits of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self { data: Vec::new(), len: 0 }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, pos: usize) -> Option<bool> {
        if pos >= self.len {
            return None;
        }
        Some((self.data[pos >> 3] << (pos & 7)) & 0b10000000 != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| (self.data[i >> 3] << (i & 7)) & 0b10000000 != 0)
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the `size` low-order bits of `bits`, most significant first.
    pub fn push_bits<T>(&mut self, bits: T, size: usize) -> QRResult<()>
    where
        T: PrimInt + Display,
    {
        if !(1..=MAX_PUSH_WIDTH).contains(&size) {
            return Err(QRError::WidthOutOfRange);
        }
        let bits = bits.to_u64().ok_or(QRError::ValueOutOfRange)?;
        if bits >> size != 0 {
            return Err(QRError::ValueOutOfRange);
        }

        self.push_unchecked(bits, size);
        Ok(())
    }

    pub fn push(&mut self, bit: bool) {
        self.push_unchecked(bit as u64, 1);
    }

    /// Appends every bit of `other` in order.
    pub fn extend(&mut self, other: &BitStream) {
        for (i, &byte) in other.data.iter().enumerate() {
            let size = std::cmp::min(8, other.len - (i << 3));
            self.push_unchecked((byte >> (8 - size)) as u64, size);
        }
    }

    fn push_unchecked(&mut self, bits: u64, size: usize) {
        let mut remaining = size;
        while remaining > 0 {
            let offset = self.len & 7;
            if offset == 0 {
                self.data.push(0);
            }
            let room = 8 - offset;
            let take = std::cmp::min(room, remaining);
            let chunk = ((bits >> (remaining - take)) & ((1 << take) - 1)) as u8;
            if let Some(last) = self.data.last_mut() {
                *last |= chunk << (room - take);
            }
            self.len += take;
            remaining -= take;
        }
    }
}

impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static MAX_PUSH_WIDTH: usize = 31;
