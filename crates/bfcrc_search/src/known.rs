//! Checking the catalogue of published CRC models before a full sweep.

use crate::matcher::matches_all;
use bfcrc_engine::{known_models, BitCrcEngine, KnownModel, TestVector};

/// Returns every catalogue model of `width` that reproduces all `vectors`.
///
/// Cheap compared to any brute-force sweep: the catalogue holds at most a
/// few dozen entries per width. An empty vector list matches nothing.
pub fn find_known_models(width: u8, vectors: &[TestVector]) -> Vec<&'static KnownModel> {
    if vectors.is_empty() {
        return Vec::new();
    }
    known_models(width)
        .filter(|known| {
            let model = known.model();
            match BitCrcEngine::for_model(&model) {
                Ok(mut engine) => matches_all(&mut engine, model.initial, vectors),
                Err(_) => false,
            }
        })
        .collect()
}
