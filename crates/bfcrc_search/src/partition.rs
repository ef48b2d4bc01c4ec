//! Splitting the polynomial axis into per-worker sub-ranges.

use crate::dimension::Dimension;
use std::ops::RangeInclusive;

/// A closed interval `[start, end]` of polynomials assigned to one worker.
///
/// Bounds are `u64` so that a range ending at `2^32 - 1` can be iterated
/// without wrapping. `start > end` denotes an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRange {
    /// First polynomial, inclusive.
    pub start: u64,
    /// Last polynomial, inclusive.
    pub end: u64,
}

impl SearchRange {
    /// Creates the closed interval `[start, end]`.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// A range holding exactly one polynomial.
    pub fn single(value: u64) -> Self {
        Self::new(value, value)
    }

    /// Returns `true` if the range holds no polynomial.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of polynomials in the range.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Iterates the polynomials of the range.
    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// Divides the polynomial axis into `num_threads` contiguous partitions.
///
/// A fixed polynomial yields a single one-element partition regardless of
/// `num_threads`. A probed range `[start, end]` is cut into steps of
/// `(end - start) / num_threads` (at least 1); the last partition always ends
/// at `end` and absorbs the division remainder. When there are more threads
/// than polynomials the surplus partitions are empty. The non-empty
/// partitions cover the range exactly once.
pub fn partition(polynomial: &Dimension<u32>, num_threads: usize) -> Vec<SearchRange> {
    let span = match polynomial {
        Dimension::Fixed(poly) => return vec![SearchRange::single(*poly as u64)],
        Dimension::Probed(_) => polynomial.span(),
    };
    let (start, end) = (*span.start(), *span.end());
    let threads = num_threads.max(1) as u64;
    let step = ((end.saturating_sub(start)) / threads).max(1);

    (0..threads)
        .map(|i| {
            let lo = start + i * step;
            let hi = if i == threads - 1 {
                end
            } else {
                (lo + step - 1).min(end)
            };
            SearchRange::new(lo, hi)
        })
        .collect()
}
