//! LFU and MFU (frequency based) replacement policies.

use std::cmp::Reverse;

use crate::common::FrameId;
use crate::memory::{FrameStore, PageFrame};

/// Evict the frame with the fewest accesses.
pub fn select_lfu(store: &FrameStore) -> Option<FrameId> {
    store
        .iter()
        .filter(|f| f.is_allocated())
        .min_by_key(|f| f.access_count())
        .map(PageFrame::frame_index)
}

/// Evict the frame with the most accesses.
///
/// `max_by_key` would return the last maximum; reversing the key keeps
/// the lowest index on ties.
pub fn select_mfu(store: &FrameStore) -> Option<FrameId> {
    store
        .iter()
        .filter(|f| f.is_allocated())
        .min_by_key(|f| Reverse(f.access_count()))
        .map(PageFrame::frame_index)
}
