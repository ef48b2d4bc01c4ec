//! Running a complete search across worker threads.

use crate::collector::MatchSet;
use crate::config::SearchConfig;
use crate::context::{CancelToken, SearchContext};
use crate::error::SearchError;
use crate::known::find_known_models;
use crate::matcher::model_matches;
use crate::partition::partition;
use crate::progress::{NullReporter, ProgressReporter};
use crate::worker::BruteForceWorker;
use bfcrc_engine::{max_value, TestVector};
use std::thread;
use std::time::Duration;

/// Configures and runs one brute-force search.
///
/// ```no_run
/// # use bfcrc_search::{configure, SearchCoordinator, SearchParams};
/// # use bfcrc_engine::TestVector;
/// let config = configure(&SearchParams { probe_initial: true, ..Default::default() })?;
/// let vectors = vec![TestVector::from_bytes(b"123456789", 0x29B1)];
/// let matches = SearchCoordinator::new(&config).threads(4).run(&vectors)?;
/// # Ok::<(), bfcrc_search::SearchError>(())
/// ```
pub struct SearchCoordinator<'a> {
    config: &'a SearchConfig,
    threads: usize,
    reporter: &'a dyn ProgressReporter,
    cancel: CancelToken,
    report_interval: Duration,
    known_first: bool,
}

impl<'a> SearchCoordinator<'a> {
    /// A single-threaded, silent search over `config`.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            threads: 1,
            reporter: &NullReporter,
            cancel: CancelToken::new(),
            report_interval: Duration::from_secs(1),
            known_first: false,
        }
    }

    /// Sets the number of worker threads. Ignored when the polynomial is
    /// fixed, which always runs on one thread.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sends progress and match events to `reporter`.
    pub fn reporter(mut self, reporter: &'a dyn ProgressReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Lets the caller stop the search through `token`.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Sets the minimum time between progress reports.
    pub fn report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Tries the catalogue of published models before sweeping.
    ///
    /// If any published model inside the search space reproduces every
    /// vector, those models are returned and no sweep is performed.
    pub fn known_first(mut self, enabled: bool) -> Self {
        self.known_first = enabled;
        self
    }

    /// Runs the search and returns every model that reproduces all `vectors`.
    ///
    /// All validation happens before any thread is started. Threads are
    /// scoped to this call and always joined before it returns.
    pub fn run(&self, vectors: &[TestVector]) -> Result<MatchSet, SearchError> {
        let config = self.config;
        config.validate()?;
        if self.threads == 0 {
            return Err(SearchError::NoThreads);
        }
        if vectors.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        for (index, vector) in vectors.iter().enumerate() {
            if vector.expected_crc as u64 > max_value(config.width) {
                return Err(SearchError::ExpectedCrcTooWide {
                    index,
                    value: vector.expected_crc,
                    width: config.width,
                });
            }
        }

        if self.known_first {
            let known = self.known_matches(vectors)?;
            if !known.is_empty() {
                for model in &known {
                    self.reporter.on_match(model);
                }
                return Ok(known);
            }
        }

        let threads = if config.polynomial.is_probed() {
            self.threads
        } else {
            1
        };
        let ranges = partition(&config.polynomial, threads);
        let ctx = SearchContext::new(config.crc_steps(), self.reporter)
            .with_report_interval(self.report_interval)
            .with_cancel_token(self.cancel.clone());

        thread::scope(|scope| -> Result<(), SearchError> {
            let mut handles = Vec::with_capacity(ranges.len());
            let mut result = Ok(());
            for (index, range) in ranges.iter().enumerate() {
                if range.is_empty() {
                    continue;
                }
                let mut worker = match BruteForceWorker::new(config, vectors, *range) {
                    Ok(worker) => worker,
                    Err(err) => {
                        result = Err(err.into());
                        break;
                    }
                };
                let ctx = &ctx;
                let spawned = thread::Builder::new()
                    .name(format!("bfcrc-worker-{index}"))
                    .spawn_scoped(scope, move || {
                        ctx.reporter().on_partition(index, &worker.range());
                        worker.run(ctx);
                    });
                match spawned {
                    Ok(handle) => handles.push((index, handle)),
                    Err(source) => {
                        result = Err(SearchError::Spawn { index, source });
                        break;
                    }
                }
            }
            if result.is_err() {
                ctx.abort();
            }

            // Every started worker is joined, even after a setup failure.
            for (index, handle) in handles {
                if handle.join().is_err() && result.is_ok() {
                    ctx.abort();
                    result = Err(SearchError::WorkerPanicked { index });
                }
            }
            result
        })?;

        if self.cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        self.reporter.on_progress(&ctx.snapshot());
        Ok(ctx.into_collector().take())
    }

    /// Catalogue models that lie inside the search space and match, evaluated
    /// with the configured feed order.
    fn known_matches(&self, vectors: &[TestVector]) -> Result<MatchSet, SearchError> {
        let config = self.config;
        let mut found = Vec::new();
        for known in find_known_models(config.width, vectors) {
            let model = config.model(
                known.poly,
                known.init,
                known.xorout,
                known.refin,
                known.refout,
            );
            if config.contains(&model) && model_matches(&model, vectors)? {
                found.push(model);
            }
        }
        Ok(found.into_iter().collect())
    }
}

/// Searches `config` with `num_threads` workers and no progress reporting.
pub fn do_brute_force(
    config: &SearchConfig,
    vectors: &[TestVector],
    num_threads: usize,
) -> Result<MatchSet, SearchError> {
    SearchCoordinator::new(config).threads(num_threads).run(vectors)
}
