//! Exhaustive, multi-threaded recovery of CRC parameters.
//!
//! Given test vectors (messages with their known checksums) and a
//! [`SearchConfig`] describing which CRC parameters are fixed and which are
//! probed, [`do_brute_force`] partitions the polynomial space across worker
//! threads, evaluates every candidate with a [`BitCrcEngine`], and returns the
//! [`MatchSet`] of models that reproduce every checksum.
//!
//! [`BitCrcEngine`]: bfcrc_engine::BitCrcEngine

#![warn(missing_docs)]

pub mod collector;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod dimension;
pub mod error;
pub mod known;
pub mod matcher;
pub mod partition;
pub mod progress;
pub mod worker;

pub use collector::{MatchCollector, MatchSet};
pub use config::{configure, SearchConfig, SearchParams};
pub use context::{CancelToken, SearchContext};
pub use coordinator::{do_brute_force, SearchCoordinator};
pub use dimension::Dimension;
pub use error::SearchError;
pub use known::find_known_models;
pub use matcher::{matches_all, model_matches, CrcCheck};
pub use partition::{partition, SearchRange};
pub use progress::{format_count, NullReporter, ProgressReporter, ProgressSnapshot};
pub use worker::BruteForceWorker;
