//! PageFrame - a physical slot in the frame store.
//!
//! A [`PageFrame`] holds at most one resident page plus the access metadata
//! the replacement policies read:
//! - When the page was loaded (FIFO)
//! - When it was last touched (LRU)
//! - A reference bit (CLOCK)
//! - How many times it was touched (LFU/MFU)

use crate::common::{FrameId, PageId};

/// A frame in the frame store.
///
/// Frames are created empty when the simulator is initialized and live
/// until the next `initialize`. Only the owning simulator mutates them;
/// the setters are crate-private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFrame {
    /// Fixed 0-based position of this frame.
    frame_index: FrameId,

    /// Which page is resident, or None if the frame is free.
    resident_page: Option<PageId>,

    /// Logical time of the last allocation into this frame.
    load_time: u64,

    /// Logical time of the most recent hit or allocation.
    last_access_time: u64,

    /// Set on every access, cleared only by the CLOCK scan.
    reference_bit: bool,

    /// Hits plus the initial allocation.
    access_count: u64,
}

impl PageFrame {
    /// Create a new free frame.
    pub fn new(frame_index: FrameId) -> Self {
        Self {
            frame_index,
            resident_page: None,
            load_time: 0,
            last_access_time: 0,
            reference_bit: false,
            access_count: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn frame_index(&self) -> FrameId {
        self.frame_index
    }

    #[inline]
    pub fn resident_page(&self) -> Option<PageId> {
        self.resident_page
    }

    #[inline]
    pub fn load_time(&self) -> u64 {
        self.load_time
    }

    #[inline]
    pub fn last_access_time(&self) -> u64 {
        self.last_access_time
    }

    #[inline]
    pub fn reference_bit(&self) -> bool {
        self.reference_bit
    }

    #[inline]
    pub fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Check if a page is resident.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.resident_page.is_some()
    }

    /// Check if the frame is free (no page loaded).
    #[inline]
    pub fn is_free(&self) -> bool {
        self.resident_page.is_none()
    }

    /// Read-only view for external consumers.
    pub fn state(&self) -> FrameState {
        FrameState {
            frame_index: self.frame_index,
            page: self.resident_page,
            allocated: self.is_allocated(),
            load_time: self.load_time,
            last_access_time: self.last_access_time,
            reference_bit: self.reference_bit,
            access_count: self.access_count,
        }
    }

    // ========================================================================
    // Mutation (crate-private)
    // ========================================================================

    /// Record a hit at `time`.
    pub(crate) fn access(&mut self, time: u64) {
        self.last_access_time = time;
        self.reference_bit = true;
        self.access_count += 1;
    }

    /// Place `page` in this frame at `time`.
    pub(crate) fn allocate(&mut self, page: PageId, time: u64) {
        debug_assert!(self.is_free(), "allocate into occupied {}", self.frame_index);
        self.resident_page = Some(page);
        self.load_time = time;
        self.last_access_time = time;
        self.reference_bit = true;
        self.access_count = 1;
    }

    /// Return the frame to the free state, yielding the page it held.
    pub(crate) fn deallocate(&mut self) -> Option<PageId> {
        let evicted = self.resident_page.take();
        self.load_time = 0;
        self.last_access_time = 0;
        self.reference_bit = false;
        self.access_count = 0;
        evicted
    }

    pub(crate) fn clear_reference_bit(&mut self) {
        self.reference_bit = false;
    }
}

/// A point-in-time copy of one frame's metadata.
///
/// Unlike `PageFrame`, every field is public so front ends and report
/// writers can consume it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameState {
    pub frame_index: FrameId,
    pub page: Option<PageId>,
    pub allocated: bool,
    pub load_time: u64,
    pub last_access_time: u64,
    pub reference_bit: bool,
    pub access_count: u64,
}
