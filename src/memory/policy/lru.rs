//! LRU (Least Recently Used) replacement policy.

use crate::common::FrameId;
use crate::memory::{FrameStore, PageFrame};

/// Evict the frame touched least recently.
pub fn select(store: &FrameStore) -> Option<FrameId> {
    store
        .iter()
        .filter(|f| f.is_allocated())
        .min_by_key(|f| f.last_access_time())
        .map(PageFrame::frame_index)
}
