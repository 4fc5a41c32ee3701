//! Configuration for a simulation run.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

/// Default number of page frames.
pub const DEFAULT_FRAME_COUNT: usize = 4;

/// Default page size in bytes.
///
/// Informational only: replacement decisions never look at it.
pub const DEFAULT_PAGE_SIZE: usize = 1024;

/// Default upper bound for generated page numbers.
pub const DEFAULT_MAX_PAGE: u32 = 7;

/// Default length of a generated reference string.
pub const DEFAULT_REFERENCE_LENGTH: usize = 15;

/// Reference string used when the caller supplies none.
pub const DEFAULT_REFERENCE_STRING: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

/// Default reference string as page ids.
pub fn default_reference_string() -> Vec<PageId> {
    DEFAULT_REFERENCE_STRING.iter().copied().map(PageId).collect()
}

/// Page replacement policy.
///
/// A closed set matched exhaustively. Names parse case-insensitively;
/// an unknown name is a configuration error rather than a silent fallback.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "lru".parse().unwrap();
/// assert_eq!(policy, Policy::Lru);
/// assert_eq!(policy.to_string(), "LRU");
/// assert!("LRU-K".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Evict the page loaded earliest.
    #[default]
    Fifo,
    /// Evict the page accessed least recently.
    Lru,
    /// Evict the page whose next use is farthest away (needs lookahead).
    Optimal,
    /// Second-chance scan over reference bits.
    Clock,
    /// Evict a uniformly random frame.
    Random,
    /// Evict the page with the fewest accesses.
    Lfu,
    /// Evict the page with the most accesses.
    Mfu,
}

impl Policy {
    /// Every supported policy, in canonical order.
    pub const ALL: [Policy; 7] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Optimal,
        Policy::Clock,
        Policy::Random,
        Policy::Lfu,
        Policy::Mfu,
    ];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "OPTIMAL",
            Policy::Clock => "CLOCK",
            Policy::Random => "RANDOM",
            Policy::Lfu => "LFU",
            Policy::Mfu => "MFU",
        }
    }

    /// Whether identical inputs always produce identical histories.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Policy::Random)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Configuration(format!("unknown replacement policy '{}'", wanted)))
    }
}

/// Validated settings for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    frame_count: usize,
    page_size: usize,
    policy: Policy,
}

impl SimulatorConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// `Error::Configuration` if `frame_count` or `page_size` is 0.
    pub fn new(frame_count: usize, page_size: usize, policy: Policy) -> Result<Self> {
        if frame_count < 1 {
            return Err(Error::Configuration(format!(
                "frame count must be at least 1, got {}",
                frame_count
            )));
        }
        if page_size < 1 {
            return Err(Error::Configuration(format!(
                "page size must be at least 1, got {}",
                page_size
            )));
        }
        Ok(Self {
            frame_count,
            page_size,
            policy,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
            policy: Policy::default(),
        }
    }
}
