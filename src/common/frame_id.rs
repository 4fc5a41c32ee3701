//! Frame identifier type.

use std::fmt;

/// Identifies a frame in the frame store.
///
/// Using `usize` because:
/// 1. Frames are stored in `Vec<PageFrame>`
/// 2. Direct indexing without casting: `frames[frame_id.0]`
/// 3. Frame indices are 0-based and fixed for the life of a simulation
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The 0-based slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_ordering() {
        assert!(FrameId::new(0) < FrameId::new(1));
        assert_eq!(FrameId::new(3).index(), 3);
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }
}
