//! Eviction policy implementations (replacers).
//!
//! Every policy implements [`EvictionPolicy`] and is picked at run start by
//! its selector string through [`PolicyKind`]:
//! - [`FifoPolicy`] - `"FIFO"`, evict the oldest arrival
//! - [`LifoPolicy`] - `"LIFO"`, evict the newest arrival
//! - [`OptimalPolicy`] - `"Optimal"`, Belady's farthest-next-use
//! - [`FrequencyLookaheadPolicy`] - `"AI-Based"`, fewest remaining uses
//!
//! The `"AI-Based"` selector is a historical name. The policy behind it is a
//! fixed counting heuristic; nothing is learned or adapted between runs.

mod fifo;
mod frequency;
mod lifo;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Page, SlotId};
use crate::memory::FrameSet;

pub use fifo::FifoPolicy;
pub use frequency::FrequencyLookaheadPolicy;
pub use lifo::LifoPolicy;
pub use optimal::OptimalPolicy;

/// Chooses which resident page to evict on a miss when the frame set is full.
///
/// Implementations are pure: they read the frame set and the reference
/// sequence and mutate neither. Lookahead policies may inspect
/// `reference[current + 1..]`, the part of the trace not yet consumed.
pub trait EvictionPolicy: Send + Sync {
    /// Selector string this policy answers to.
    fn name(&self) -> &'static str;

    /// Pick the slot whose page should be evicted.
    ///
    /// `current` is the 0-based index of the access being served. Returns
    /// `None` only when `frames` is empty.
    fn select_victim(
        &self,
        frames: &FrameSet,
        current: usize,
        reference: &[Page],
    ) -> Option<SlotId>;
}

/// The recognized policy selectors.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let kind: PolicyKind = "Optimal".parse().unwrap();
/// assert_eq!(kind, PolicyKind::Optimal);
/// assert!("LRU".parse::<PolicyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lifo,
    Optimal,
    FrequencyLookahead,
}

impl PolicyKind {
    /// Every policy, in selector order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Optimal,
        PolicyKind::FrequencyLookahead,
    ];

    /// The selector string for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lifo => "LIFO",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::FrequencyLookahead => "AI-Based",
        }
    }

    /// Instantiate the policy.
    pub fn build(&self) -> Box<dyn EvictionPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy),
            PolicyKind::Lifo => Box::new(LifoPolicy),
            PolicyKind::Optimal => Box::new(OptimalPolicy),
            PolicyKind::FrequencyLookahead => Box::new(FrequencyLookaheadPolicy),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Selectors are matched exactly, case included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
