//! Frequency-lookahead replacement policy (selector `"AI-Based"`).

use crate::common::{Page, SlotId};
use crate::memory::FrameSet;

use super::EvictionPolicy;

/// Evicts the page that occurs the fewest times in the rest of the trace.
///
/// Unlike [`OptimalPolicy`](super::OptimalPolicy), which only looks at the
/// next use, this counts every remaining occurrence. Ties go to the lowest
/// slot. The heuristic is deterministic and stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyLookaheadPolicy;

fn remaining_uses(page: &Page, future: &[Page]) -> usize {
    future.iter().filter(|p| *p == page).count()
}

impl EvictionPolicy for FrequencyLookaheadPolicy {
    fn name(&self) -> &'static str {
        "AI-Based"
    }

    fn select_victim(
        &self,
        frames: &FrameSet,
        current: usize,
        reference: &[Page],
    ) -> Option<SlotId> {
        let future = reference.get(current + 1..).unwrap_or(&[]);

        let mut best: Option<(SlotId, usize)> = None;
        for (slot, page) in frames.iter() {
            let count = remaining_uses(page, future);
            log::trace!("frequency: {} holds {} used {} more times", slot, page, count);

            match best {
                Some((_, best_count)) if count >= best_count => {}
                _ => best = Some((slot, count)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}
