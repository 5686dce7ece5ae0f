//! LIFO (Last-In-First-Out) replacement policy.

use crate::common::{Page, SlotId};
use crate::memory::FrameSet;

use super::EvictionPolicy;

/// Evicts the most recently placed page.
///
/// Once the frame set fills up, the newest page always sits in the slot that
/// was written last, so LIFO keeps recycling that one slot while the older
/// pages stay put.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifoPolicy;

impl EvictionPolicy for LifoPolicy {
    fn name(&self) -> &'static str {
        "LIFO"
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
            .max_by_key(|&slot| frames.loaded_at(slot))
    }
}
