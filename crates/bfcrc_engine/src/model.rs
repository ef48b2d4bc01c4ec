//! CRC parameter sets and the test vectors they are checked against.

use crate::bits::BitMessage;
use crate::error::EngineError;
use crate::feed::FeedOrder;
use crate::width::{check_fits, check_width};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete CRC parameter set, either a search candidate or a result.
///
/// The polynomial is stored truncated (the implicit top bit is omitted), as in
/// the reveng catalogue. Ordering is field by field, which gives match sets a
/// stable, deterministic iteration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct CrcModel {
    /// CRC width in bits, `1..=32`.
    pub width: u8,
    /// Truncated generator polynomial.
    pub polynomial: u32,
    /// Initial remainder.
    pub initial: u32,
    /// Value XORed into the final remainder.
    pub final_xor: u32,
    /// Whether message bits are consumed reflected.
    pub reflected_input: bool,
    /// Whether the final remainder is bit-reversed before the final XOR.
    pub reflected_output: bool,
    /// The feed order the model was evaluated with.
    #[serde(default)]
    pub feed_order: FeedOrder,
}

impl CrcModel {
    /// Checks the width and that every integer field fits within it.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_width(self.width as u32)?;
        check_fits("polynomial", self.polynomial as u64, self.width)?;
        check_fits("initial", self.initial as u64, self.width)?;
        check_fits("final_xor", self.final_xor as u64, self.width)?;
        Ok(())
    }

    /// Compares the five CRC parameters and the width, ignoring the feed order.
    pub fn same_parameters(&self, other: &CrcModel) -> bool {
        self.width == other.width
            && self.polynomial == other.polynomial
            && self.initial == other.initial
            && self.final_xor == other.final_xor
            && self.reflected_input == other.reflected_input
            && self.reflected_output == other.reflected_output
    }
}

impl fmt::Display for CrcModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.width as usize).div_ceil(4);
        write!(
            f,
            "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x}",
            self.width,
            self.polynomial,
            self.initial,
            self.reflected_input,
            self.reflected_output,
            self.final_xor,
            w = digits + 2,
        )
    }
}

/// A message and the checksum a correct model must produce for it.
///
/// Built once from input data and shared read-only by every search worker.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TestVector {
    /// The message bits, in wire order.
    pub message: BitMessage,
    /// The expected checksum, `width` bits wide.
    pub expected_crc: u32,
}

impl TestVector {
    /// Creates a test vector.
    pub fn new(message: BitMessage, expected_crc: u32) -> Self {
        Self {
            message,
            expected_crc,
        }
    }

    /// Creates a test vector from a byte message.
    pub fn from_bytes(bytes: &[u8], expected_crc: u32) -> Self {
        Self::new(BitMessage::from_bytes(bytes), expected_crc)
    }
}
