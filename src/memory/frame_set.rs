//! FrameSet - the resident pages of a simulation run.
//!
//! A [`FrameSet`] is a fixed-capacity, index-addressable list of slots. Each
//! slot holds one page plus the load stamp policies need:
//! - Slot order is the order pages appear in every step snapshot
//! - Load stamps record arrival order, which survives in-place replacement

use crate::common::{Page, SlotId};

/// One occupied slot.
#[derive(Debug, Clone)]
struct Slot {
    page: Page,

    /// Value of the frame set's clock when `page` was placed here.
    loaded_at: u64,
}

/// The set of currently resident pages.
///
/// Capacity is fixed at construction. Slots fill left to right via
/// [`append`](Self::append); once full, pages only change through
/// [`replace_at`](Self::replace_at), which keeps the slot's position.
///
/// # Example
/// ```
/// use pagesim::{FrameSet, Page, SlotId};
///
/// let mut frames = FrameSet::new(2);
/// frames.append(Page::from(1));
/// frames.append(Page::from(2));
/// assert!(frames.is_full());
///
/// let evicted = frames.replace_at(SlotId::new(0), Page::from(3));
/// assert_eq!(evicted, Page::from(1));
/// assert_eq!(frames.snapshot(), vec![Page::from(3), Page::from(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet {
    slots: Vec<Slot>,
    capacity: usize,

    /// Bumped on every placement; never reused within a run.
    clock: u64,
}

impl FrameSet {
    /// Create an empty frame set with room for `capacity` pages.
    ///
    /// Slots are allocated as pages arrive, so `capacity` may be far larger
    /// than the trace will ever fill.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            clock: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Check whether `page` is resident.
    pub fn contains(&self, page: &Page) -> bool {
        self.position(page).is_some()
    }

    /// Slot currently holding `page`, if any.
    pub fn position(&self, page: &Page) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|slot| slot.page == *page)
            .map(SlotId::new)
    }

    /// Page held by `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    #[inline]
    pub fn page_at(&self, slot: SlotId) -> &Page {
        &self.slots[slot.0].page
    }

    /// Load stamp of `slot`. Larger means more recently placed.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    #[inline]
    pub fn loaded_at(&self, slot: SlotId) -> u64 {
        self.slots[slot.0].loaded_at
    }

    /// Iterate over occupied slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Page)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (SlotId::new(i), &slot.page))
    }

    /// Copy of the resident pages in slot order.
    pub fn snapshot(&self) -> Vec<Page> {
        self.slots.iter().map(|slot| slot.page.clone()).collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place `page` in the next free slot.
    ///
    /// # Panics
    /// Panics if the frame set is already full.
    pub fn append(&mut self, page: Page) -> SlotId {
        assert!(!self.is_full(), "append on a full frame set");
        debug_assert!(!self.contains(&page), "page {} already resident", page);

        let loaded_at = self.tick();
        self.slots.push(Slot { page, loaded_at });
        SlotId::new(self.slots.len() - 1)
    }

    /// Overwrite `slot` with `page`, returning the evicted page.
    ///
    /// The slot keeps its position but gets a fresh load stamp.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn replace_at(&mut self, slot: SlotId, page: Page) -> Page {
        debug_assert!(!self.contains(&page), "page {} already resident", page);

        let loaded_at = self.tick();
        let old = std::mem::replace(&mut self.slots[slot.0], Slot { page, loaded_at });
        old.page
    }

    fn tick(&mut self) -> u64 {
        let now = self.clock;
        self.clock += 1;
        now
    }
}
