//! Bitwise CRC engine with run-time width and parameters.
//!
//! The engine performs MSB-first polynomial division one bit at a time, which
//! lets it consume messages of any bit length and in any of the supported
//! [`FeedOrder`]s.

use crate::bits::BitMessage;
use crate::error::EngineError;
use crate::feed::FeedOrder;
use crate::model::CrcModel;
use crate::width::{check_width, max_value};

/// Reverses the order of the low `width` bits of `x`.
///
/// Bits above `width` are discarded. `width` must be in `1..=64`.
pub fn bit_reverse(x: u64, width: u8) -> u64 {
    debug_assert!((1..=64).contains(&width));
    x.reverse_bits() >> (64 - width as u32)
}

/// A CRC calculator for one width with mutable parameters.
///
/// One instance is owned by each search worker. [`set`](Self::set) installs a
/// full parameter set, [`reset`](Self::reset) only reloads the running
/// remainder, so the innermost loop over initial values never touches the
/// other fields.
#[derive(Clone, Debug)]
pub struct BitCrcEngine {
    width: u8,
    high_bit: u64,
    mask: u64,
    polynomial: u64,
    initial: u64,
    final_xor: u64,
    reflect_in: bool,
    reflect_out: bool,
    feed_order: FeedOrder,
    remainder: u64,
}

impl BitCrcEngine {
    /// Creates an engine for `width`-bit CRCs with all parameters zeroed.
    pub fn new(width: u8) -> Result<Self, EngineError> {
        let width = check_width(width as u32)?;
        Ok(Self {
            width,
            high_bit: 1u64 << (width - 1),
            mask: max_value(width),
            polynomial: 0,
            initial: 0,
            final_xor: 0,
            reflect_in: false,
            reflect_out: false,
            feed_order: FeedOrder::Auto,
            remainder: 0,
        })
    }

    /// Creates an engine configured with every parameter of `model`.
    pub fn for_model(model: &CrcModel) -> Result<Self, EngineError> {
        let mut engine = Self::new(model.width)?;
        engine.set(
            model.polynomial,
            model.initial,
            model.final_xor,
            model.reflected_input,
            model.reflected_output,
        );
        engine.set_feed_order(model.feed_order);
        Ok(engine)
    }

    /// Installs a parameter set and loads `initial` into the remainder.
    ///
    /// Values are masked to the engine width.
    pub fn set(
        &mut self,
        polynomial: u32,
        initial: u32,
        final_xor: u32,
        reflect_in: bool,
        reflect_out: bool,
    ) {
        self.polynomial = polynomial as u64 & self.mask;
        self.initial = initial as u64 & self.mask;
        self.final_xor = final_xor as u64 & self.mask;
        self.reflect_in = reflect_in;
        self.reflect_out = reflect_out;
        self.remainder = self.initial;
    }

    /// Selects how message bits are consumed by [`calc_crc`](Self::calc_crc).
    pub fn set_feed_order(&mut self, feed_order: FeedOrder) {
        self.feed_order = feed_order;
    }

    /// Reloads the running remainder without touching any other parameter.
    pub fn reset(&mut self, remainder: u32) {
        self.remainder = remainder as u64 & self.mask;
    }

    /// Folds one message bit into the remainder.
    #[inline]
    pub fn process_bit(&mut self, bit: bool) {
        if bit {
            self.remainder ^= self.high_bit;
        }
        let divide = self.remainder & self.high_bit != 0;
        self.remainder = (self.remainder << 1) & self.mask;
        if divide {
            self.remainder ^= self.polynomial;
        }
    }

    /// Returns the finished checksum for the bits processed so far.
    pub fn checksum(&self) -> u32 {
        let rem = if self.reflect_out {
            bit_reverse(self.remainder, self.width)
        } else {
            self.remainder
        };
        ((rem ^ self.final_xor) & self.mask) as u32
    }

    /// Resets to `initial`, feeds all of `message`, and returns the checksum.
    ///
    /// `Auto` feed order is resolved against this message's length on every
    /// call, so vectors of different lengths can share one engine.
    pub fn compute(&mut self, initial: u32, message: &BitMessage) -> u32 {
        self.reset(initial);
        let bits = message.as_slice();
        match self.feed_order.resolve(self.reflect_in, bits.len()) {
            FeedOrder::Forward | FeedOrder::Auto => {
                for &bit in bits {
                    self.process_bit(bit);
                }
            }
            FeedOrder::FullyReversed => {
                for &bit in bits.iter().rev() {
                    self.process_bit(bit);
                }
            }
            FeedOrder::BytewiseReversed => {
                for group in bits.chunks(8) {
                    for &bit in group.iter().rev() {
                        self.process_bit(bit);
                    }
                }
            }
        }
        self.checksum()
    }

    /// Computes the CRC of `message` from `initial` and compares it to `expected`.
    pub fn calc_crc(&mut self, initial: u32, message: &BitMessage, expected: u32) -> bool {
        let sum = self.compute(initial, message);
        expected as u64 <= self.mask && sum == expected
    }

    /// Returns the CRC width in bits.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the configured truncated polynomial.
    pub fn polynomial(&self) -> u32 {
        self.polynomial as u32
    }

    /// Returns the initial value installed by the last [`set`](Self::set).
    pub fn initial(&self) -> u32 {
        self.initial as u32
    }

    /// Returns the configured final XOR value.
    pub fn final_xor(&self) -> u32 {
        self.final_xor as u32
    }

    /// Returns the configured feed order.
    pub fn feed_order(&self) -> FeedOrder {
        self.feed_order
    }
}
