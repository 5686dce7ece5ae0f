//! Slot identifier type.

use std::fmt;

/// Identifies a slot in a [`FrameSet`](crate::FrameSet).
///
/// Using `usize` because slots are stored in a `Vec` and the id doubles as
/// the position of the page in the frame snapshot.
///
/// # Example
/// ```
/// use pagesim::SlotId;
///
/// let slot = SlotId::new(2);
/// assert_eq!(slot.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_ordering() {
        assert!(SlotId::new(0) < SlotId::new(1));
        assert_eq!(SlotId::new(5), SlotId::new(5));
    }

    #[test]
    fn test_slot_id_display() {
        assert_eq!(format!("{}", SlotId::new(3)), "Slot(3)");
    }
}
