//! Progress snapshots and the reporter interface the search talks to.

use crate::partition::SearchRange;
use bfcrc_engine::CrcModel;
use std::fmt;
use std::time::Duration;

/// A point-in-time view of how far a search has come.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Wall time since the search started.
    pub elapsed: Duration,
    /// Candidate models evaluated so far.
    pub completed: u64,
    /// Total candidate models in the search space.
    pub total: u64,
}

impl ProgressSnapshot {
    /// Candidates evaluated per second, or 0 before any time has passed.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.completed as f64 / secs
        } else {
            0.0
        }
    }

    /// Completion in percent, clamped to `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.completed as f64 * 100.0 / self.total as f64).min(100.0)
    }

    /// Estimated time to completion at the current rate.
    ///
    /// `None` until the rate is known.
    pub fn eta(&self) -> Option<Duration> {
        let rate = self.rate();
        if rate <= 0.0 {
            return None;
        }
        let remaining = self.total.saturating_sub(self.completed) as f64;
        Some(Duration::from_secs_f64(remaining / rate))
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}s: {} CRCs/s, {:.2}% done ({} of {})",
            self.elapsed.as_secs_f64(),
            format_count(self.rate() as u64),
            self.percent(),
            format_count(self.completed),
            format_count(self.total),
        )?;
        match self.eta() {
            Some(eta) => write!(f, ", {} to go", format_duration(eta)),
            None => Ok(()),
        }
    }
}

/// Receives search events; every method defaults to a no-op.
///
/// Called from worker threads, so implementations must be `Sync`. Progress
/// calls are throttled by the search context; match calls are not.
pub trait ProgressReporter: Sync {
    /// A periodic progress update.
    fn on_progress(&self, _snapshot: &ProgressSnapshot) {}

    /// A model reproduced every test vector.
    fn on_match(&self, _model: &CrcModel) {}

    /// A worker started on its polynomial partition.
    fn on_partition(&self, _index: usize, _range: &SearchRange) {}
}

/// A reporter that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {}

/// Formats a count with a `k`, `M`, `B` or `T` suffix.
///
/// Values below one thousand are printed as-is.
pub fn format_count(n: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (1_000_000_000_000, "T"),
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "k"),
    ];
    for (scale, suffix) in UNITS {
        if n >= scale {
            return format!("{:.2}{suffix}", n as f64 / scale as f64);
        }
    }
    n.to_string()
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if h > 0 {
        format!("{h}h{m:02}m{s:02}s")
    } else if m > 0 {
        format!("{m}m{s:02}s")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(secs: u64, completed: u64, total: u64) -> ProgressSnapshot {
        ProgressSnapshot {
            elapsed: Duration::from_secs(secs),
            completed,
            total,
        }
    }

    #[test]
    fn format_count_suffixes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_500), "1.50k");
        assert_eq!(format_count(65_500), "65.50k");
        assert_eq!(format_count(2_000_000), "2.00M");
        assert_eq!(format_count(4_294_967_296), "4.29B");
        assert_eq!(format_count(1_000_000_000_000), "1.00T");
    }

    #[test]
    fn rate_and_eta() {
        let snap = snapshot(10, 1_000, 3_000);
        assert_eq!(snap.rate(), 100.0);
        assert_eq!(snap.eta(), Some(Duration::from_secs(20)));
        assert!((snap.percent() - 33.333).abs() < 0.01);
    }

    #[test]
    fn no_eta_before_time_passes() {
        let snap = snapshot(0, 0, 100);
        assert_eq!(snap.rate(), 0.0);
        assert_eq!(snap.eta(), None);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(snapshot(1, 150, 100).percent(), 100.0);
        assert_eq!(snapshot(1, 0, 0).percent(), 100.0);
    }

    #[test]
    fn display_includes_eta() {
        let text = snapshot(10, 1_000, 3_000).to_string();
        assert_eq!(text, "10.0s: 100 CRCs/s, 33.33% done (1.00k of 3.00k), 20s to go");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::from_secs(59)), "59s");
        assert_eq!(format_duration(Duration::from_secs(61)), "1m01s");
        assert_eq!(format_duration(Duration::from_secs(3_725)), "1h02m05s");
    }
}
