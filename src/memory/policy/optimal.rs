//! OPTIMAL (Belady) replacement policy.
//!
//! Needs the future: the full reference string and the current logical
//! time are passed in explicitly as a [`Lookahead`].

use std::cmp::Reverse;

use crate::common::{FrameId, PageId};
use crate::memory::FrameStore;

use super::resident;

/// Read-only view of the reference string from the current step onward.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<'a> {
    reference: &'a [PageId],
    now: u64,
}

impl<'a> Lookahead<'a> {
    /// `now` is the logical time of the step being processed (1-based),
    /// so the search starts at reference index `now`.
    pub fn new(reference: &'a [PageId], now: u64) -> Self {
        Self { reference, now }
    }

    /// Index of the next occurrence of `page` strictly after `now`,
    /// or None if it is never referenced again.
    pub fn next_use(&self, page: PageId) -> Option<usize> {
        let start = usize::try_from(self.now).ok()?;
        self.reference
            .get(start..)?
            .iter()
            .position(|&p| p == page)
            .map(|offset| start + offset)
    }
}

/// Evict the frame whose page is needed farthest in the future.
///
/// A page never needed again beats every finite distance. Among several
/// such pages the lowest frame index wins.
pub fn select(store: &FrameStore, lookahead: Lookahead<'_>) -> Option<FrameId> {
    resident(store)
        .map(|(frame_id, page)| {
            let next = lookahead.next_use(page);
            (frame_id, (next.is_none(), next))
        })
        .min_by_key(|&(_, distance)| Reverse(distance))
        .map(|(frame_id, _)| frame_id)
}
