//! Exhaustive evaluation of one polynomial partition.

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::matcher::matches_all;
use crate::partition::SearchRange;
use bfcrc_engine::{BitCrcEngine, EngineError, TestVector};

/// Sweeps every candidate whose polynomial lies in one [`SearchRange`].
///
/// Loop nesting, outer to inner, is reflect-in, reflect-out, polynomial,
/// final XOR, initial value. The engine is reconfigured once per final XOR;
/// the initial-value sweep only resets the remainder.
pub struct BruteForceWorker<'s> {
    config: &'s SearchConfig,
    vectors: &'s [TestVector],
    range: SearchRange,
    engine: BitCrcEngine,
}

impl<'s> BruteForceWorker<'s> {
    /// Creates a worker for `range` with its own engine.
    pub fn new(
        config: &'s SearchConfig,
        vectors: &'s [TestVector],
        range: SearchRange,
    ) -> Result<Self, EngineError> {
        let mut engine = BitCrcEngine::new(config.width)?;
        engine.set_feed_order(config.feed_order);
        Ok(Self {
            config,
            vectors,
            range,
            engine,
        })
    }

    /// The polynomials this worker covers.
    pub fn range(&self) -> SearchRange {
        self.range
    }

    /// Runs the sweep, pushing matches and progress into `ctx`.
    ///
    /// Returns early, leaving the partition incomplete, if the context is
    /// cancelled; cancellation is polled before every final XOR value, so a
    /// fixed polynomial still stops within one initial-value sweep.
    pub fn run(&mut self, ctx: &SearchContext<'_>) {
        let config = self.config;
        let sweep_len = config.initial.len();

        for refin in config.reflected_input.values() {
            for refout in config.reflected_output.values() {
                for poly in self.range.iter() {
                    let poly = poly as u32;
                    for final_xor in config.final_xor.values() {
                        if ctx.is_cancelled() {
                            return;
                        }
                        self.engine.set(poly, 0, final_xor, refin, refout);
                        for initial in config.initial.values() {
                            if matches_all(&mut self.engine, initial, self.vectors) {
                                let model = config.model(poly, initial, final_xor, refin, refout);
                                ctx.record_match(model);
                            }
                        }
                        ctx.add_progress(sweep_len);
                    }
                }
            }
        }
    }
}
