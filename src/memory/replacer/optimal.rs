//! Optimal (Belady) replacement policy.

use crate::common::{Page, SlotId};
use crate::memory::FrameSet;

use super::EvictionPolicy;

/// Evicts the page whose next use lies farthest in the future.
///
/// A page that never occurs again in the remaining trace counts as infinitely
/// far away. Among equally distant pages the one in the lowest slot wins.
///
/// No online policy can beat this one on fault count for a given trace and
/// frame count, which makes it the baseline the others are measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

/// Offset of the next use of `page` within `future`, `None` if never used.
fn next_use(page: &Page, future: &[Page]) -> Option<usize> {
    future.iter().position(|p| p == page)
}

/// `true` if distance `a` is strictly farther than `b`.
fn farther(a: Option<usize>, b: Option<usize>) -> bool {
    match (a, b) {
        (None, None) => false,
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some(x), Some(y)) => x > y,
    }
}

impl EvictionPolicy for OptimalPolicy {
    fn name(&self) -> &'static str {
        "Optimal"
    }

    fn select_victim(
        &self,
        frames: &FrameSet,
        current: usize,
        reference: &[Page],
    ) -> Option<SlotId> {
        let future = reference.get(current + 1..).unwrap_or(&[]);

        let mut best: Option<(SlotId, Option<usize>)> = None;
        for (slot, page) in frames.iter() {
            let distance = next_use(page, future);
            log::trace!("optimal: {} holds {} next used at {:?}", slot, page, distance);

            // Strict comparison keeps the earliest slot on ties.
            match best {
                Some((_, best_distance)) if !farther(distance, best_distance) => {}
                _ => best = Some((slot, distance)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}
