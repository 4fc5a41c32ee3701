//! Driver - steps a simulator through its reference string.
//!
//! The simulator itself only ever processes the page it is handed. The
//! driver keeps the cursor that front ends use for "step forward",
//! "run all" and progress reporting. Pacing (auto-play timers) stays with
//! the caller: it simply calls [`Driver::step_forward`] on its own schedule.

use crate::common::{PageId, Result};
use crate::memory::{MemorySimulator, StepRecord};

/// Owns a simulator and a position in its reference string.
///
/// # Example
/// ```
/// use pagesim::{Driver, MemorySimulator, PageId, Policy};
///
/// let mut sim = MemorySimulator::new();
/// sim.initialize(3, 1024, Policy::Lru).unwrap();
/// sim.set_reference_string(vec![PageId(1), PageId(2), PageId(1)]);
///
/// let mut driver = Driver::new(sim);
/// while let Some(step) = driver.step_forward().unwrap() {
///     println!("{}", step);
/// }
/// assert!(driver.is_finished());
/// assert_eq!(driver.simulator().get_statistics().unwrap().hits, 1);
/// ```
#[derive(Debug)]
pub struct Driver {
    simulator: MemorySimulator,
    cursor: usize,
}

impl Driver {
    /// Start at the beginning of the simulator's reference string.
    pub fn new(simulator: MemorySimulator) -> Self {
        Self {
            simulator,
            cursor: 0,
        }
    }

    pub fn simulator(&self) -> &MemorySimulator {
        &self.simulator
    }

    /// Mutable access, e.g. to install a new reference string.
    ///
    /// The cursor is not moved; call [`reset`](Self::reset) to rewind.
    pub fn simulator_mut(&mut self) -> &mut MemorySimulator {
        &mut self.simulator
    }

    pub fn into_inner(self) -> MemorySimulator {
        self.simulator
    }

    /// Index of the next reference to consume.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.simulator.reference_string().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Fraction consumed, 0.0 for an empty reference string.
    pub fn progress(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            0.0
        } else {
            self.cursor.min(total) as f64 / total as f64
        }
    }

    /// Process the next reference, or return `None` once exhausted.
    ///
    /// # Errors
    /// Propagates simulator errors; the cursor only moves on success.
    pub fn step_forward(&mut self) -> Result<Option<StepRecord>> {
        let Some(page) = self.next_page() else {
            return Ok(None);
        };
        let record = self.simulator.simulate_step(page)?;
        self.cursor += 1;
        Ok(Some(record))
    }

    /// Reset, then consume the whole reference string.
    pub fn run_all(&mut self) -> Result<Vec<StepRecord>> {
        self.reset();
        let mut records = Vec::with_capacity(self.len());
        while let Some(record) = self.step_forward()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Rewind the cursor and reset the simulator.
    pub fn reset(&mut self) {
        self.simulator.reset();
        self.cursor = 0;
    }

    fn next_page(&self) -> Option<PageId> {
        self.simulator.reference_string().get(self.cursor).copied()
    }
}
