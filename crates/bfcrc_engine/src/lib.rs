//! Bit-level CRC computation for parameter recovery.
//!
//! This crate provides the [`BitCrcEngine`], which computes a CRC over an
//! arbitrary-length bit sequence for a run-time chosen width, polynomial,
//! initial remainder, final XOR and reflection settings. It also defines the
//! shared data types of the search ([`CrcModel`], [`TestVector`],
//! [`BitMessage`]) and the catalogue of publicly known CRC models.

#![warn(missing_docs)]

pub mod bits;
pub mod catalogue;
pub mod engine;
pub mod error;
pub mod feed;
pub mod model;
pub mod width;

pub use bits::{BitMessage, ParseBitsError};
pub use catalogue::{known_models, KnownModel, KNOWN_MODELS};
pub use engine::{bit_reverse, BitCrcEngine};
pub use error::EngineError;
pub use feed::FeedOrder;
pub use model::{CrcModel, TestVector};
pub use width::{check_fits, check_width, max_value, MAX_WIDTH};
