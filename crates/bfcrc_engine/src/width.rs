//! Width bounds and masking helpers shared by the engine and the search.

use crate::error::EngineError;

/// The widest CRC the engine supports, in bits.
pub const MAX_WIDTH: u8 = 32;

/// Validates a CRC width and narrows it to `u8`.
pub fn check_width(width: u32) -> Result<u8, EngineError> {
    if width == 0 || width > MAX_WIDTH as u32 {
        return Err(EngineError::InvalidWidth(width));
    }
    Ok(width as u8)
}

/// Returns `2^width - 1`, the largest value representable in `width` bits.
///
/// Computed in `u64` so that `width == 32` does not overflow.
pub fn max_value(width: u8) -> u64 {
    (1u64 << width) - 1
}

/// Checks that `value` has no bits set at or above `width`.
pub fn check_fits(field: &'static str, value: u64, width: u8) -> Result<(), EngineError> {
    if value > max_value(width) {
        return Err(EngineError::ValueTooWide {
            field,
            value,
            width,
        });
    }
    Ok(())
}
