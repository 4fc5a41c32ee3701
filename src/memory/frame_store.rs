//! FrameStore - the fixed, ordered array of page frames.

use std::ops::Index;

use crate::common::{FrameId, PageId};
use crate::memory::frame::{FrameState, PageFrame};

/// An ordered sequence of page frames with a fixed size.
///
/// The store owns no policy logic. It answers "which frame is free" with
/// a lowest-index-wins rule so that runs are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStore {
    frames: Vec<PageFrame>,
}

impl FrameStore {
    /// Create `frame_count` free frames.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: (0..frame_count)
                .map(|i| PageFrame::new(FrameId::new(i)))
                .collect(),
        }
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Look up a frame by id.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&PageFrame> {
        self.frames.get(frame_id.0)
    }

    /// Iterate frames in index order.
    pub fn iter(&self) -> impl Iterator<Item = &PageFrame> {
        self.frames.iter()
    }

    /// Lowest-indexed free frame, if any.
    pub fn find_free_frame(&self) -> Option<FrameId> {
        self.frames
            .iter()
            .find(|f| f.is_free())
            .map(PageFrame::frame_index)
    }

    /// Number of frames holding a page.
    pub fn allocated_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_allocated()).count()
    }

    /// True when every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.frames.iter().all(PageFrame::is_allocated)
    }

    /// Frame-to-page view, `None` for free frames.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.frames.iter().map(PageFrame::resident_page).collect()
    }

    /// Per-frame metadata copies in index order.
    pub fn states(&self) -> Vec<FrameState> {
        self.frames.iter().map(PageFrame::state).collect()
    }

    // ========================================================================
    // Mutation (crate-private, driven by the simulator)
    // ========================================================================

    pub(crate) fn access(&mut self, frame_id: FrameId, time: u64) {
        self.frames[frame_id.0].access(time);
    }

    pub(crate) fn allocate(&mut self, frame_id: FrameId, page: PageId, time: u64) {
        self.frames[frame_id.0].allocate(page, time);
    }

    pub(crate) fn deallocate(&mut self, frame_id: FrameId) -> Option<PageId> {
        self.frames[frame_id.0].deallocate()
    }

    pub(crate) fn clear_reference_bit(&mut self, frame_id: FrameId) {
        self.frames[frame_id.0].clear_reference_bit();
    }
}

impl Index<FrameId> for FrameStore {
    type Output = PageFrame;

    fn index(&self, frame_id: FrameId) -> &PageFrame {
        &self.frames[frame_id.0]
    }
}
