//! Deciding whether a candidate reproduces every test vector.

use bfcrc_engine::{BitCrcEngine, CrcModel, EngineError, TestVector};

/// Something that can check one test vector for a given initial value.
///
/// Implemented by [`BitCrcEngine`] using whatever parameters were last
/// installed with [`BitCrcEngine::set`].
pub trait CrcCheck {
    /// Returns `true` if the vector's message yields its expected CRC when
    /// starting from `initial`.
    fn check(&mut self, initial: u32, vector: &TestVector) -> bool;
}

impl CrcCheck for BitCrcEngine {
    #[inline]
    fn check(&mut self, initial: u32, vector: &TestVector) -> bool {
        self.calc_crc(initial, &vector.message, vector.expected_crc)
    }
}

/// Returns `true` only if every vector matches, in order.
///
/// Stops at the first mismatch. Almost every candidate fails on the first
/// vector, so this is where the search spends most of its time.
#[inline]
pub fn matches_all<C: CrcCheck + ?Sized>(
    checker: &mut C,
    initial: u32,
    vectors: &[TestVector],
) -> bool {
    vectors.iter().all(|vector| checker.check(initial, vector))
}

/// Checks a complete model against `vectors` with a fresh engine.
pub fn model_matches(model: &CrcModel, vectors: &[TestVector]) -> Result<bool, EngineError> {
    let mut engine = BitCrcEngine::for_model(model)?;
    Ok(matches_all(&mut engine, model.initial, vectors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfcrc_engine::FeedOrder;

    /// Records which vectors were evaluated and fails on selected indices.
    struct CountingCheck {
        fail_at: Option<usize>,
        seen: Vec<usize>,
    }

    impl CrcCheck for CountingCheck {
        fn check(&mut self, _initial: u32, vector: &TestVector) -> bool {
            let index = vector.expected_crc as usize;
            self.seen.push(index);
            Some(index) != self.fail_at
        }
    }

    fn indexed_vectors(n: u32) -> Vec<TestVector> {
        (0..n).map(|i| TestVector::from_bytes(&[], i)).collect()
    }

    #[test]
    fn stops_at_first_failure() {
        let vectors = indexed_vectors(5);
        let mut stub = CountingCheck {
            fail_at: Some(1),
            seen: Vec::new(),
        };
        assert!(!matches_all(&mut stub, 0, &vectors));
        assert_eq!(stub.seen, vec![0, 1]);
    }

    #[test]
    fn evaluates_everything_on_success() {
        let vectors = indexed_vectors(4);
        let mut stub = CountingCheck {
            fail_at: None,
            seen: Vec::new(),
        };
        assert!(matches_all(&mut stub, 0, &vectors));
        assert_eq!(stub.seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn first_vector_failure_touches_nothing_else() {
        let vectors = indexed_vectors(3);
        let mut stub = CountingCheck {
            fail_at: Some(0),
            seen: Vec::new(),
        };
        assert!(!matches_all(&mut stub, 0, &vectors));
        assert_eq!(stub.seen, vec![0]);
    }

    #[test]
    fn model_matches_with_real_engine() {
        let model = CrcModel {
            width: 16,
            polynomial: 0x1021,
            initial: 0xFFFF,
            final_xor: 0,
            reflected_input: false,
            reflected_output: false,
            feed_order: FeedOrder::Auto,
        };
        let good = vec![
            TestVector::from_bytes(b"123456789", 0x29B1),
            TestVector::from_bytes(&[0xF2, 0x01, 0x83], 0xD374),
        ];
        assert_eq!(model_matches(&model, &good), Ok(true));

        let bad = vec![
            TestVector::from_bytes(b"123456789", 0x29B1),
            TestVector::from_bytes(&[0xF2, 0x01, 0x83], 0xD375),
        ];
        assert_eq!(model_matches(&model, &bad), Ok(false));
    }

    #[test]
    fn model_matches_rejects_invalid_width() {
        let model = CrcModel {
            width: 0,
            polynomial: 0,
            initial: 0,
            final_xor: 0,
            reflected_input: false,
            reflected_output: false,
            feed_order: FeedOrder::Auto,
        };
        assert!(model_matches(&model, &indexed_vectors(1)).is_err());
    }
}
