//! Error types for search configuration and execution.

use bfcrc_engine::EngineError;

/// Errors that stop a search from starting or from completing.
///
/// Everything except [`Spawn`](SearchError::Spawn),
/// [`WorkerPanicked`](SearchError::WorkerPanicked) and
/// [`Cancelled`](SearchError::Cancelled) is detected before any worker thread
/// is started. A search that completes without a match is not an error; it
/// yields an empty [`MatchSet`](crate::MatchSet).
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The width or a fixed parameter value is not representable.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The probed polynomial range has its start after its end.
    #[error("polynomial range {start:#x}..={end:#x} is empty")]
    InvalidPolynomialRange {
        /// Range start.
        start: u32,
        /// Range end.
        end: u32,
    },

    /// No test vectors were supplied.
    #[error("at least one test vector is required")]
    EmptyInput,

    /// The thread count was zero.
    #[error("thread count must be at least 1")]
    NoThreads,

    /// A test vector's expected CRC has bits set above the CRC width.
    #[error("test vector {index}: expected CRC {value:#x} does not fit in {width} bits")]
    ExpectedCrcTooWide {
        /// Zero-based index of the vector.
        index: usize,
        /// The expected CRC value.
        value: u32,
        /// The configured width.
        width: u8,
    },

    /// A worker thread could not be started.
    #[error("failed to spawn search worker {index}: {source}")]
    Spawn {
        /// Partition index of the worker.
        index: usize,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// A worker thread panicked; its partition was not fully searched.
    #[error("search worker {index} panicked")]
    WorkerPanicked {
        /// Partition index of the worker.
        index: usize,
    },

    /// The search was cancelled before every partition finished.
    #[error("search cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_input() {
        assert_eq!(
            format!("{}", SearchError::EmptyInput),
            "at least one test vector is required"
        );
    }

    #[test]
    fn display_polynomial_range() {
        let err = SearchError::InvalidPolynomialRange {
            start: 0x20,
            end: 0x10,
        };
        assert_eq!(format!("{err}"), "polynomial range 0x20..=0x10 is empty");
    }

    #[test]
    fn engine_errors_are_transparent() {
        let err: SearchError = EngineError::InvalidWidth(40).into();
        assert_eq!(format!("{err}"), "unsupported CRC width 40 (expected 1..=32)");
    }

    #[test]
    fn display_expected_crc() {
        let err = SearchError::ExpectedCrcTooWide {
            index: 2,
            value: 0x1ff,
            width: 8,
        };
        assert_eq!(
            format!("{err}"),
            "test vector 2: expected CRC 0x1ff does not fit in 8 bits"
        );
    }
}
