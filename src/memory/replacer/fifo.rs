//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{Page, SlotId};
use crate::memory::FrameSet;

use super::EvictionPolicy;

/// Evicts the page that has been resident longest.
///
/// Arrival order comes from the frame set's load stamps, so a page that was
/// swapped into slot 0 late is not mistaken for the oldest just because of
/// its position. Hits do not reorder anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoPolicy;

impl EvictionPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn select_victim(
        &self,
        frames: &FrameSet,
        _current: usize,
        _reference: &[Page],
    ) -> Option<SlotId> {
        frames
            .iter()
            .map(|(slot, _)| slot)
            .min_by_key(|&slot| frames.loaded_at(slot))
    }
}
