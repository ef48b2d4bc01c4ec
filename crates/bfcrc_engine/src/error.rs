//! Error types for engine construction and model validation.

/// Errors raised when a CRC configuration cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The CRC width is outside the supported `1..=32` range.
    #[error("unsupported CRC width {0} (expected 1..=32)")]
    InvalidWidth(u32),

    /// A parameter value has bits set above the CRC width.
    #[error("{field} value {value:#x} does not fit in {width} bits")]
    ValueTooWide {
        /// Name of the offending parameter.
        field: &'static str,
        /// The value that was supplied.
        value: u64,
        /// The CRC width it was checked against.
        width: u8,
    },
}
