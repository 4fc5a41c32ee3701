//! FIFO (First-In-First-Out) replacement policy.

use crate::common::FrameId;
use crate::memory::{FrameStore, PageFrame};

/// Evict the frame whose page was loaded earliest.
///
/// Hits do not reorder: only `load_time` is consulted.
pub fn select(store: &FrameStore) -> Option<FrameId> {
    store
        .iter()
        .filter(|f| f.is_allocated())
        .min_by_key(|f| f.load_time())
        .map(PageFrame::frame_index)
}
