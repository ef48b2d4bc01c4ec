//! Bit consumption orders for feeding a message into the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The order in which message bits are folded into the CRC remainder.
///
/// [`Auto`](FeedOrder::Auto) picks a concrete order per message with
/// [`resolve`](FeedOrder::resolve); the other variants force that order for
/// every message regardless of the reflect-in setting.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FeedOrder {
    /// Choose from reflect-in and message length on every computation.
    #[default]
    Auto,
    /// Bits `0..N` in their original order.
    Forward,
    /// Bits `N-1..=0`, the whole message reversed.
    FullyReversed,
    /// Each 8-bit group reversed internally, groups kept in message order.
    BytewiseReversed,
}

impl FeedOrder {
    /// Resolves `Auto` to a concrete order; concrete orders are returned as-is.
    ///
    /// Without input reflection the message is fed forward. With reflection,
    /// byte-aligned messages are fed byte by byte LSB first, the conventional
    /// behavior of byte-oriented reflected CRCs, and anything else is fed
    /// fully reversed.
    pub fn resolve(self, reflect_in: bool, bit_len: usize) -> FeedOrder {
        match self {
            FeedOrder::Auto if !reflect_in => FeedOrder::Forward,
            FeedOrder::Auto if bit_len % 8 != 0 => FeedOrder::FullyReversed,
            FeedOrder::Auto => FeedOrder::BytewiseReversed,
            explicit => explicit,
        }
    }

    /// Returns the kebab-case name used in configuration files and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedOrder::Auto => "auto",
            FeedOrder::Forward => "forward",
            FeedOrder::FullyReversed => "fully-reversed",
            FeedOrder::BytewiseReversed => "bytewise-reversed",
        }
    }
}

impl fmt::Display for FeedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
