//! Simulator - drives a reference sequence through a frame set.
//!
//! # Architecture
//! ```text
//! reference[i] ──► FrameSet::contains? ──yes──► HIT
//!                        │ no
//!                        ▼
//!                  FrameSet full? ──no──► append            (MISS)
//!                        │ yes
//!                        ▼
//!        EvictionPolicy::select_victim ──► replace_at       (MISS, replaced)
//!                        │
//!                        ▼
//!               snapshot ──► StepRecord ──► SummaryBuilder
//! ```
//!
//! Each step depends on the frame set left behind by the previous one, so a
//! run is strictly sequential. Separate runs share nothing and can be driven
//! from different threads.

use crate::common::{Error, Page, Result};
use crate::memory::replacer::{EvictionPolicy, PolicyKind};
use crate::memory::{AccessStatus, FrameSet, StepRecord, Summary, SummaryBuilder};

/// Simulate `algorithm` over `reference` with `frames` resident slots.
///
/// Input is validated before any state is built:
/// - `reference` must be non-empty ([`Error::InvalidInput`])
/// - `frames` must be at least 1 ([`Error::InvalidInput`])
/// - `algorithm` must be `"FIFO"`, `"LIFO"`, `"Optimal"` or `"AI-Based"`
///   ([`Error::UnknownPolicy`])
///
/// # Example
/// ```
/// use pagesim::{pages, run_simulation};
///
/// let reference = pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let summary = run_simulation(&reference, 3, "Optimal").unwrap();
/// assert_eq!(summary.faults, 7);
/// ```
pub fn run_simulation(reference: &[Page], frames: usize, algorithm: &str) -> Result<Summary> {
    if reference.is_empty() {
        return Err(Error::InvalidInput("Invalid reference string".to_string()));
    }
    if frames == 0 {
        return Err(Error::InvalidInput(
            "Frame count must be a positive integer".to_string(),
        ));
    }
    let kind: PolicyKind = algorithm.parse()?;

    Simulator::new(reference, frames, kind.build()).run()
}

/// One simulation run in progress.
///
/// Most callers want [`run_simulation`]; the struct is public so a policy can
/// be plugged in directly or a run can be stepped one access at a time.
pub struct Simulator<'a> {
    reference: &'a [Page],
    frames: FrameSet,
    policy: Box<dyn EvictionPolicy>,

    /// Index of the next access to serve.
    cursor: usize,
}

impl<'a> Simulator<'a> {
    /// Create a simulator over `reference` with `capacity` frames.
    ///
    /// No validation happens here; see [`run_simulation`].
    pub fn new(reference: &'a [Page], capacity: usize, policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            reference,
            frames: FrameSet::new(capacity),
            policy,
            cursor: 0,
        }
    }

    /// Current residency.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// `true` once every access has been served.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.reference.len()
    }

    /// Serve the next access, or `Ok(None)` if the trace is exhausted.
    pub fn step(&mut self) -> Result<Option<StepRecord>> {
        let index = self.cursor;
        let Some(page) = self.reference.get(index) else {
            return Ok(None);
        };

        let (status, replaced) = if self.frames.contains(page) {
            (AccessStatus::Hit, None)
        } else if !self.frames.is_full() {
            self.frames.append(page.clone());
            (AccessStatus::Miss, None)
        } else {
            let victim = self
                .policy
                .select_victim(&self.frames, index, self.reference)
                .ok_or(Error::NoVictim)?;
            let evicted = self.frames.replace_at(victim, page.clone());
            log::trace!(
                "{}: step {} evicted {} from {} for {}",
                self.policy.name(),
                index + 1,
                evicted,
                victim,
                page
            );
            (AccessStatus::Miss, Some(evicted))
        };

        self.cursor += 1;
        let record = StepRecord {
            step: index + 1,
            page: page.clone(),
            status,
            memory: self.frames.snapshot(),
            replaced,
        };
        log::trace!(
            "{}: step {} page {} {:?} memory {:?}",
            self.policy.name(),
            record.step,
            record.page,
            record.status,
            record.memory
        );
        Ok(Some(record))
    }

    /// Serve every remaining access and build the summary.
    pub fn run(mut self) -> Result<Summary> {
        log::debug!(
            "simulating {} over {} accesses with {} frames",
            self.policy.name(),
            self.reference.len(),
            self.frames.capacity()
        );

        let mut builder = SummaryBuilder::with_capacity(self.reference.len().saturating_sub(self.cursor));
        while let Some(record) = self.step()? {
            builder.record(record);
        }
        let summary = builder.finish();

        log::debug!(
            "{} finished: {} hits, {} faults",
            self.policy.name(),
            summary.hits,
            summary.faults
        );
        Ok(summary)
    }
}
