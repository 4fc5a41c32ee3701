//! Page replacement policies.
//!
//! Each policy picks a victim frame once every frame is allocated:
//! - [`fifo`] - smallest load time
//! - [`lru`] - smallest last access time
//! - [`optimal`] - farthest next use in the reference string
//! - [`clock`] - second-chance scan with a persistent hand
//! - [`random`] - uniform pick from an injectable RNG
//! - [`frequency`] - LFU (fewest accesses) and MFU (most accesses)
//!
//! Every deterministic policy breaks ties by the lowest frame index.
//! [`PolicySelector`] dispatches on [`Policy`] and owns the state that
//! outlives a single selection (the CLOCK hand and the RNG).

pub mod clock;
pub mod fifo;
pub mod frequency;
pub mod lru;
pub mod optimal;
pub mod random;

use std::fmt;

use rand::RngCore;

use crate::common::{FrameId, PageId, Policy};
use crate::memory::FrameStore;

pub use clock::ClockHand;
pub use optimal::Lookahead;
pub use random::RandomPicker;

/// Dispatches victim selection to the configured policy.
///
/// One selector belongs to exactly one simulator, so two simulators never
/// share a CLOCK hand or an RNG stream.
pub struct PolicySelector {
    policy: Policy,
    clock: ClockHand,
    random: RandomPicker,
}

impl PolicySelector {
    /// Create a selector whose RNG is seeded from OS entropy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            clock: ClockHand::new(),
            random: RandomPicker::from_entropy(),
        }
    }

    /// Create a selector with a caller-supplied RNG.
    pub fn with_rng(policy: Policy, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            policy,
            clock: ClockHand::new(),
            random: RandomPicker::new(rng),
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Current CLOCK hand position.
    pub fn clock_hand(&self) -> usize {
        self.clock.position()
    }

    /// Switch policy, rewinding the CLOCK hand. The RNG is kept.
    pub(crate) fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
        self.clock.reset();
    }

    pub(crate) fn set_rng(&mut self, rng: impl RngCore + Send + 'static) {
        self.random = RandomPicker::new(rng);
    }

    /// Rewind per-run state. The RNG stream continues.
    pub(crate) fn reset(&mut self) {
        self.clock.reset();
    }

    /// Choose the frame to evict.
    ///
    /// Called only when the store is full. Only CLOCK mutates the store,
    /// and only its reference bits.
    pub(crate) fn select_victim(
        &mut self,
        store: &mut FrameStore,
        lookahead: Lookahead<'_>,
    ) -> Option<FrameId> {
        match self.policy {
            Policy::Fifo => fifo::select(store),
            Policy::Lru => lru::select(store),
            Policy::Optimal => optimal::select(store, lookahead),
            Policy::Clock => self.clock.select(store),
            Policy::Random => self.random.select(store),
            Policy::Lfu => frequency::select_lfu(store),
            Policy::Mfu => frequency::select_mfu(store),
        }
    }
}

impl fmt::Debug for PolicySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicySelector")
            .field("policy", &self.policy)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Resident frames paired with their page, in index order.
fn resident(store: &FrameStore) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
    store
        .iter()
        .filter_map(|f| f.resident_page().map(|p| (f.frame_index(), p)))
}
