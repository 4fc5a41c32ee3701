//! RANDOM replacement policy.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::common::FrameId;
use crate::memory::FrameStore;

/// Uniform victim picker over an injectable RNG.
pub struct RandomPicker {
    rng: Box<dyn RngCore + Send>,
}

impl RandomPicker {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Any frame index in `0..store.len()`.
    pub fn select(&mut self, store: &FrameStore) -> Option<FrameId> {
        if store.is_empty() {
            return None;
        }
        Some(FrameId::new(self.rng.gen_range(0..store.len())))
    }
}
