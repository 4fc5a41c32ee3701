//! CLOCK (second-chance) replacement policy.

use log::trace;

use crate::common::FrameId;
use crate::memory::FrameStore;

/// Persistent scan pointer for the CLOCK policy.
///
/// Owned by one selector and kept across steps; `reset` rewinds it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockHand {
    position: usize,
}

impl ClockHand {
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Index of the next frame the scan will inspect.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Sweep from the hand, clearing set reference bits, and evict the
    /// first frame found with a clear bit. The hand ends one past the victim.
    ///
    /// Terminates within two revolutions: after the first, every bit the
    /// sweep passed is clear.
    pub fn select(&mut self, store: &mut FrameStore) -> Option<FrameId> {
        let len = store.len();
        if len == 0 {
            return None;
        }
        self.position %= len;

        for _ in 0..=2 * len {
            let frame_id = FrameId::new(self.position);
            self.position = (self.position + 1) % len;

            if store[frame_id].reference_bit() {
                trace!("clock: second chance for {}", frame_id);
                store.clear_reference_bit(frame_id);
            } else if store[frame_id].is_allocated() {
                return Some(frame_id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn full_store(n: usize) -> FrameStore {
        let mut store = FrameStore::new(n);
        for i in 0..n {
            store.allocate(FrameId::new(i), PageId::new(i as u32 + 1), i as u64 + 1);
        }
        store
    }

    #[test]
    fn test_clock_all_bits_set_evicts_hand_frame() {
        let mut store = full_store(2);
        let mut hand = ClockHand::new();

        assert_eq!(hand.select(&mut store), Some(FrameId::new(0)));
        assert_eq!(hand.position(), 1);
        assert!(!store[FrameId::new(1)].reference_bit());
    }

    #[test]
    fn test_clock_skips_referenced_frames() {
        let mut store = full_store(3);
        store.clear_reference_bit(FrameId::new(2));
        let mut hand = ClockHand::new();

        assert_eq!(hand.select(&mut store), Some(FrameId::new(2)));
        assert_eq!(hand.position(), 0);
        assert!(!store[FrameId::new(0)].reference_bit());
        assert!(!store[FrameId::new(1)].reference_bit());
    }

    #[test]
    fn test_clock_hand_persists_between_calls() {
        let mut store = full_store(3);
        let mut hand = ClockHand::new();

        assert_eq!(hand.select(&mut store), Some(FrameId::new(0)));
        // Frames 1 and 2 were cleared by the first sweep
        assert_eq!(hand.select(&mut store), Some(FrameId::new(1)));
        assert_eq!(hand.select(&mut store), Some(FrameId::new(2)));
        assert_eq!(hand.position(), 0);
    }

    #[test]
    fn test_clock_empty_store() {
        let mut store = FrameStore::new(0);
        assert_eq!(ClockHand::new().select(&mut store), None);
    }
}
