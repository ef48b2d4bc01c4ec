//! Per-search shared state handed to every worker by reference.

use crate::collector::MatchCollector;
use crate::progress::{NullReporter, ProgressReporter, ProgressSnapshot};
use bfcrc_engine::CrcModel;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A cloneable flag that asks a running search to stop early.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything workers of one search share.
///
/// Owned by the coordinator for the duration of a single search; there is no
/// process-wide state, so independent searches can run side by side.
pub struct SearchContext<'a> {
    collector: MatchCollector,
    started: Instant,
    last_report: Mutex<Instant>,
    report_interval: Duration,
    total: u64,
    cancel: CancelToken,
    aborted: AtomicBool,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> SearchContext<'a> {
    /// Creates a context for a search of `total` candidates.
    pub fn new(total: u64, reporter: &'a dyn ProgressReporter) -> Self {
        let now = Instant::now();
        Self {
            collector: MatchCollector::new(),
            started: now,
            last_report: Mutex::new(now),
            report_interval: Duration::from_secs(1),
            total,
            cancel: CancelToken::new(),
            aborted: AtomicBool::new(false),
            reporter,
        }
    }

    /// Sets the minimum time between two progress reports.
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Uses `cancel` instead of a private token.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The shared match and progress sink.
    pub fn collector(&self) -> &MatchCollector {
        &self.collector
    }

    /// The reporter events are forwarded to.
    pub fn reporter(&self) -> &dyn ProgressReporter {
        self.reporter
    }

    /// Returns `true` if the search should stop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled() || self.aborted.load(Ordering::Relaxed)
    }

    /// Stops every worker without touching the caller's [`CancelToken`].
    ///
    /// Used when the search has already failed and the remaining partitions
    /// are pointless.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    /// Records a match and forwards it to the reporter.
    pub fn record_match(&self, model: CrcModel) {
        self.reporter.on_match(&model);
        self.collector.record_match(model);
    }

    /// Credits `steps` evaluated candidates and reports progress if the
    /// report interval has elapsed.
    ///
    /// Never blocks: if another worker is already reporting, this one skips.
    pub fn add_progress(&self, steps: u64) {
        let completed = self.collector.add_progress(steps);
        let Ok(mut last) = self.last_report.try_lock() else {
            return;
        };
        let now = Instant::now();
        if now.duration_since(*last) < self.report_interval {
            return;
        }
        *last = now;
        drop(last);
        self.reporter.on_progress(&ProgressSnapshot {
            elapsed: now.duration_since(self.started),
            completed,
            total: self.total,
        });
    }

    /// The current progress as a snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            elapsed: self.started.elapsed(),
            completed: self.collector.progress(),
            total: self.total,
        }
    }

    /// Consumes the context, returning its collector.
    pub fn into_collector(self) -> MatchCollector {
        self.collector
    }
}

impl SearchContext<'static> {
    /// A context with no reporting, for tests and one-shot searches.
    pub fn silent(total: u64) -> Self {
        Self::new(total, &NullReporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfcrc_engine::FeedOrder;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingReporter {
        progress: AtomicUsize,
        matches: AtomicUsize,
    }

    impl ProgressReporter for CountingReporter {
        fn on_progress(&self, _snapshot: &ProgressSnapshot) {
            self.progress.fetch_add(1, Ordering::Relaxed);
        }

        fn on_match(&self, _model: &CrcModel) {
            self.matches.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn context_observes_external_token() {
        let token = CancelToken::new();
        let ctx = SearchContext::silent(10).with_cancel_token(token.clone());
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn abort_leaves_token_untouched() {
        let token = CancelToken::new();
        let ctx = SearchContext::silent(10).with_cancel_token(token.clone());
        ctx.abort();
        assert!(ctx.is_cancelled());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn progress_reports_are_throttled() {
        let reporter = CountingReporter::default();
        let ctx =
            SearchContext::new(100, &reporter).with_report_interval(Duration::from_secs(3600));
        for _ in 0..10 {
            ctx.add_progress(1);
        }
        assert_eq!(reporter.progress.load(Ordering::Relaxed), 0);
        assert_eq!(ctx.snapshot().completed, 10);
    }

    #[test]
    fn zero_interval_reports_every_time() {
        let reporter = CountingReporter::default();
        let ctx = SearchContext::new(100, &reporter).with_report_interval(Duration::ZERO);
        for _ in 0..3 {
            ctx.add_progress(5);
        }
        assert_eq!(reporter.progress.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn matches_reach_reporter_and_collector() {
        let reporter = CountingReporter::default();
        let ctx = SearchContext::new(1, &reporter);
        ctx.record_match(CrcModel {
            width: 8,
            polynomial: 0x07,
            initial: 0,
            final_xor: 0,
            reflected_input: false,
            reflected_output: false,
            feed_order: FeedOrder::Auto,
        });
        assert_eq!(reporter.matches.load(Ordering::Relaxed), 1);
        assert_eq!(ctx.into_collector().take().len(), 1);
    }
}
