//! Step records and the run summary.

use std::fmt;

use serde::Serialize;

use crate::common::config::RATIO_DECIMALS;
use crate::common::Page;

/// Outcome of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessStatus {
    Hit,
    Miss,
}

/// What happened at one position of the reference sequence.
///
/// `memory` is the frame set in slot order *after* the access was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based position in the reference sequence.
    pub step: usize,
    pub page: Page,
    pub status: AccessStatus,
    pub memory: Vec<Page>,
    /// Page evicted to make room, if any.
    pub replaced: Option<Page>,
}

impl StepRecord {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.status == AccessStatus::Hit
    }
}

/// Aggregate result of one simulation run.
///
/// Ratios are rounded to two decimals, so `hit_ratio + fault_ratio` may be
/// off from 1.0 by up to 0.01.
///
/// # Example
/// ```
/// use pagesim::{pages, run_simulation};
///
/// let summary = run_simulation(&pages([1, 2, 1]), 2, "FIFO").unwrap();
/// assert_eq!(summary.hits, 1);
/// assert_eq!(summary.faults, 2);
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub hits: usize,
    pub faults: usize,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
    pub steps: Vec<StepRecord>,
}

impl Summary {
    /// Number of accesses simulated.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of misses that had to evict a resident page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.replaced.is_some()).count()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary {{ hits: {}, faults: {}, hit_ratio: {:.2}%, fault_ratio: {:.2}% }}",
            self.hits,
            self.faults,
            self.hit_ratio * 100.0,
            self.fault_ratio * 100.0
        )
    }
}

/// Folds step records into a [`Summary`].
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    hits: usize,
    faults: usize,
    steps: Vec<StepRecord>,
}

impl SummaryBuilder {
    /// Create a builder expecting roughly `len` steps.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            hits: 0,
            faults: 0,
            steps: Vec::with_capacity(len),
        }
    }

    pub fn record(&mut self, step: StepRecord) {
        match step.status {
            AccessStatus::Hit => self.hits += 1,
            AccessStatus::Miss => self.faults += 1,
        }
        self.steps.push(step);
    }

    pub fn finish(self) -> Summary {
        let total = self.steps.len();
        Summary {
            hits: self.hits,
            faults: self.faults,
            hit_ratio: round_ratio(self.hits, total),
            fault_ratio: round_ratio(self.faults, total),
            steps: self.steps,
        }
    }
}

/// `count / total` rounded to [`RATIO_DECIMALS`] places, ties to even.
///
/// Rounding works on the exact binary value of the quotient, so `1/40`
/// (stored as slightly above 0.025) becomes 0.03 while `1/8` (exactly 0.125)
/// becomes 0.12.
pub fn round_ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = count as f64 / total as f64;
    format!("{:.*}", RATIO_DECIMALS, ratio)
        .parse()
        .unwrap_or(ratio)
}
