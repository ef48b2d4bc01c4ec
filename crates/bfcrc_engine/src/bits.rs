//! Ordered bit sequences used as CRC messages.

use std::fmt;

/// An ordered, fixed-length sequence of message bits.
///
/// Bit 0 is the first bit on the wire. Bytes are expanded MSB first, so
/// `0x80` becomes `1000_0000`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitMessage {
    bits: Vec<bool>,
}

/// Error returned when a textual bit string contains something other than `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit character {found:?} at position {position}")]
pub struct ParseBitsError {
    /// Zero-based character position of the offending character.
    pub position: usize,
    /// The character that was found.
    pub found: char,
}

impl BitMessage {
    /// Creates an empty message.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Expands bytes into bits, most significant bit of each byte first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1 == 1);
            }
        }
        Self { bits }
    }

    /// Parses a string of ASCII `0` and `1` characters.
    pub fn from_bit_str(text: &str) -> Result<Self, ParseBitsError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(ParseBitsError { position, found }),
            }
        }
        Ok(Self { bits })
    }

    /// Returns the number of bits in the message.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the message has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Returns the bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Appends one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Returns a copy of the bits in `range`, or `None` if it is out of bounds.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Option<Self> {
        self.bits.get(range).map(|bits| Self {
            bits: bits.to_vec(),
        })
    }

    /// Reads `width` bits starting at `offset` as an MSB-first integer.
    pub fn read_uint(&self, offset: usize, width: u8) -> Option<u64> {
        let end = offset.checked_add(width as usize)?;
        let bits = self.bits.get(offset..end)?;
        Some(bits.iter().fold(0u64, |acc, &b| (acc << 1) | b as u64))
    }
}

impl FromIterator<bool> for BitMessage {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitMessage({} bits: {self})", self.bits.len())
    }
}
