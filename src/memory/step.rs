//! Step records - the append-only simulation trace.

use std::fmt;

use crate::common::{FrameId, PageId};

/// Outcome of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    PageFault,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Hit => f.write_str("Hit"),
            Action::PageFault => f.write_str("Page Fault"),
        }
    }
}

/// One entry of the simulation history.
///
/// Captures the memory layout *after* the step was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based, equal to the logical time of the step.
    pub step_number: u64,
    pub page: PageId,
    /// Frame-to-page layout after the step; `None` marks a free frame.
    pub memory_snapshot: Vec<Option<PageId>>,
    pub page_fault: bool,
    pub evicted_page: Option<PageId>,
    /// Frame that was hit, filled, or reused.
    pub frame_index: FrameId,
    pub action: Action,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {:02}: Page {} - {}",
            self.step_number, self.page.0, self.action
        )?;
        if self.page_fault {
            match self.evicted_page {
                Some(evicted) => write!(
                    f,
                    " (Replaced page {} in frame {})",
                    evicted.0, self.frame_index.0
                )?,
                None => write!(f, " (Loaded in frame {})", self.frame_index.0)?,
            }
        }
        Ok(())
    }
}

/// CRC32 over a canonical encoding of the history.
///
/// Equal histories always yield equal fingerprints, which makes run-to-run
/// determinism cheap to compare.
pub fn history_fingerprint(history: &[StepRecord]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();

    for record in history {
        hasher.update(&record.step_number.to_le_bytes());
        hasher.update(&record.page.0.to_le_bytes());
        hasher.update(&[u8::from(record.page_fault)]);
        update_optional_page(&mut hasher, record.evicted_page);
        hasher.update(&(record.frame_index.0 as u64).to_le_bytes());
        hasher.update(&(record.memory_snapshot.len() as u64).to_le_bytes());
        for &slot in &record.memory_snapshot {
            update_optional_page(&mut hasher, slot);
        }
    }

    hasher.finalize()
}

fn update_optional_page(hasher: &mut crc32fast::Hasher, page: Option<PageId>) {
    match page {
        Some(p) => {
            hasher.update(&[1]);
            hasher.update(&p.0.to_le_bytes());
        }
        None => hasher.update(&[0]),
    }
}
