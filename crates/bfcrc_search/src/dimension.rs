//! One axis of the CRC parameter space: a fixed value or a probed range.

use bfcrc_engine::max_value;
use std::ops::RangeInclusive;

/// A CRC parameter that is either known or searched over.
///
/// A probed numeric range is iterated through a widened `u64` counter, so a
/// range ending at `u32::MAX` terminates without wrapping back to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dimension<T> {
    /// The parameter is known and takes exactly this value.
    Fixed(T),
    /// Every value in the inclusive range is tried.
    Probed(RangeInclusive<T>),
}

impl Dimension<u32> {
    /// Probes every value representable in `width` bits.
    pub fn full(width: u8) -> Self {
        Dimension::Probed(0..=max_value(width) as u32)
    }

    /// Returns the inclusive range of values, widened to `u64`.
    pub fn span(&self) -> RangeInclusive<u64> {
        match self {
            Dimension::Fixed(v) => *v as u64..=*v as u64,
            Dimension::Probed(r) => *r.start() as u64..=*r.end() as u64,
        }
    }

    /// Iterates every value of the dimension in ascending order.
    pub fn values(&self) -> impl Iterator<Item = u32> {
        self.span().map(|v| v as u32)
    }

    /// Returns the number of values.
    pub fn len(&self) -> u64 {
        let span = self.span();
        if span.is_empty() {
            0
        } else {
            span.end() - span.start() + 1
        }
    }

    /// Returns `true` if there is no value to try.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `value` is one of the dimension's values.
    pub fn contains(&self, value: u32) -> bool {
        self.span().contains(&(value as u64))
    }
}

impl Dimension<bool> {
    /// Probes both `false` and `true`.
    pub fn both() -> Self {
        Dimension::Probed(false..=true)
    }

    /// Iterates the dimension's values, `false` before `true`.
    pub fn values(&self) -> impl Iterator<Item = bool> {
        let (lo, hi) = match self {
            Dimension::Fixed(b) => (*b, *b),
            Dimension::Probed(r) => (*r.start(), *r.end()),
        };
        (lo as u8..=hi as u8).map(|v| v != 0)
    }

    /// Returns the number of values (0, 1 or 2).
    pub fn len(&self) -> u64 {
        self.values().count() as u64
    }

    /// Returns `true` if there is no value to try.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `value` is one of the dimension's values.
    pub fn contains(&self, value: bool) -> bool {
        self.values().any(|v| v == value)
    }
}

impl<T> Dimension<T> {
    /// Returns `true` for a probed dimension.
    pub fn is_probed(&self) -> bool {
        matches!(self, Dimension::Probed(_))
    }
}
