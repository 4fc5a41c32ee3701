//! MemorySimulator - the replacement engine.
//!
//! The [`MemorySimulator`] provides:
//! - Hit/fault decisions against a page table
//! - Free-frame allocation with a lowest-index rule
//! - Victim selection through a pluggable [`Policy`]
//! - An append-only trace of [`StepRecord`]s and derived [`Statistics`]

use std::collections::HashMap;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::common::{Error, FrameId, PageId, Policy, Result, SimulatorConfig};
use crate::memory::policy::{Lookahead, PolicySelector};
use crate::memory::{
    history_fingerprint, AccessCounters, Action, FrameState, FrameStore, Statistics, StepRecord,
};

/// Simulates a fixed set of page frames under one replacement policy.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                      MemorySimulator                        │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │ page_table   │  │     frames: FrameStore            │   │
/// │  │PageId → Fid  │─▶│  [Frame0] [Frame1] [Frame2] ...   │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
/// │  │   clock      │  │   selector   │  │   history    │      │
/// │  │    u64       │  │ PolicySelect │  │Vec<StepRecord│      │
/// │  └──────────────┘  └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - A page is in `page_table` iff some frame holds it, and the entry
///   points at that frame.
/// - The logical clock equals the number of steps since the last reset.
/// - Eviction happens only when no frame is free.
///
/// # Usage
/// ```
/// use pagesim::{MemorySimulator, PageId, Policy};
///
/// let mut sim = MemorySimulator::new();
/// sim.initialize(3, 1024, Policy::Fifo).unwrap();
///
/// for page in [1, 2, 3, 4] {
///     sim.simulate_step(PageId(page)).unwrap();
/// }
///
/// let last = sim.history().last().unwrap();
/// assert_eq!(last.evicted_page, Some(PageId(1)));
/// ```
#[derive(Debug)]
pub struct MemorySimulator {
    /// None until `initialize` succeeds.
    config: Option<SimulatorConfig>,

    frames: FrameStore,

    /// Maps resident pages to their frames.
    page_table: HashMap<PageId, FrameId>,

    /// Victim selection plus the CLOCK hand and RNG.
    selector: PolicySelector,

    /// Caller-supplied sequence read by OPTIMAL and external drivers.
    reference_string: Vec<PageId>,

    history: Vec<StepRecord>,

    /// Logical time; advanced once per step, never reused.
    clock: u64,

    counters: AccessCounters,
}

impl MemorySimulator {
    /// Create an uninitialized simulator.
    ///
    /// `simulate_step` and `get_statistics` fail with
    /// `Error::Uninitialized` until `initialize` is called.
    pub fn new() -> Self {
        Self {
            config: None,
            frames: FrameStore::new(0),
            page_table: HashMap::new(),
            selector: PolicySelector::new(Policy::default()),
            reference_string: Vec::new(),
            history: Vec::new(),
            clock: 0,
            counters: AccessCounters::new(),
        }
    }

    /// Create a simulator already initialized with `config`.
    pub fn with_config(config: SimulatorConfig) -> Self {
        let mut sim = Self::new();
        sim.apply_config(config);
        sim
    }

    // ========================================================================
    // Public API: Configuration
    // ========================================================================

    /// Discard all state and rebuild an empty frame store.
    ///
    /// # Errors
    /// `Error::Configuration` if `frame_count` or `page_size` is 0. The
    /// simulator is left untouched in that case.
    pub fn initialize(&mut self, frame_count: usize, page_size: usize, policy: Policy) -> Result<()> {
        let config = SimulatorConfig::new(frame_count, page_size, policy)?;
        self.apply_config(config);
        Ok(())
    }

    /// Like [`initialize`](Self::initialize), with the policy given by name.
    ///
    /// # Errors
    /// `Error::Configuration` for an unknown policy name or bad sizes.
    pub fn initialize_named(&mut self, frame_count: usize, page_size: usize, policy: &str) -> Result<()> {
        let policy: Policy = policy.parse()?;
        self.initialize(frame_count, page_size, policy)
    }

    /// Replace the RNG used by the RANDOM policy.
    pub fn set_rng(&mut self, rng: impl RngCore + Send + 'static) {
        self.selector.set_rng(rng);
    }

    /// Seed the RANDOM policy for reproducible runs.
    pub fn seed_rng(&mut self, seed: u64) {
        self.set_rng(StdRng::seed_from_u64(seed));
    }

    /// Install the access sequence. Counters and history are kept.
    pub fn set_reference_string(&mut self, reference: impl Into<Vec<PageId>>) {
        self.reference_string = reference.into();
    }

    /// Clear frames, page table, history, clock and counters.
    ///
    /// Frame count, page size, policy and reference string are kept.
    pub fn reset(&mut self) {
        let frame_count = self.config.map_or(0, |c| c.frame_count());
        self.frames = FrameStore::new(frame_count);
        self.page_table.clear();
        self.history.clear();
        self.clock = 0;
        self.counters.reset();
        self.selector.reset();

        if let Some(config) = self.config {
            info!(
                "reset simulator: {} frames, policy {}",
                config.frame_count(),
                config.policy()
            );
        }
    }

    fn apply_config(&mut self, config: SimulatorConfig) {
        self.config = Some(config);
        self.selector.set_policy(config.policy());
        self.reset();
    }

    // ========================================================================
    // Public API: Simulation
    // ========================================================================

    /// Process one page request and return its trace record.
    ///
    /// The page argument is trusted as given; it need not come from the
    /// installed reference string.
    ///
    /// # Errors
    /// - `Error::Uninitialized` before `initialize`
    /// - `Error::NoVictim` if the policy fails on a full store (a bug)
    pub fn simulate_step(&mut self, page: PageId) -> Result<StepRecord> {
        let config = self.config.ok_or(Error::Uninitialized)?;
        let now = self.clock + 1;

        let (frame_id, evicted_page, action) = if let Some(&frame_id) = self.page_table.get(&page) {
            self.frames.access(frame_id, now);
            trace!("t={}: hit {} in {}", now, page, frame_id);
            (frame_id, None, Action::Hit)
        } else if let Some(frame_id) = self.frames.find_free_frame() {
            self.frames.allocate(frame_id, page, now);
            self.page_table.insert(page, frame_id);
            debug!("t={}: fault {}, loaded into free {}", now, page, frame_id);
            (frame_id, None, Action::PageFault)
        } else {
            let victim = self
                .selector
                .select_victim(&mut self.frames, Lookahead::new(&self.reference_string, now))
                .ok_or(Error::NoVictim)?;
            let evicted_page = self.evict(victim);
            self.frames.allocate(victim, page, now);
            self.page_table.insert(page, victim);
            debug!(
                "t={}: fault {}, {} evicted {:?} from {}",
                now,
                page,
                config.policy(),
                evicted_page,
                victim
            );
            (victim, evicted_page, Action::PageFault)
        };

        self.clock = now;
        match action {
            Action::Hit => self.counters.hits += 1,
            Action::PageFault => self.counters.page_faults += 1,
        }
        if evicted_page.is_some() {
            self.counters.evictions += 1;
        }
        debug_assert!(self.page_table_consistent());

        let record = StepRecord {
            step_number: now,
            page,
            memory_snapshot: self.frames.snapshot(),
            page_fault: action == Action::PageFault,
            evicted_page,
            frame_index: frame_id,
            action,
        };
        self.history.push(record.clone());
        Ok(record)
    }

    /// Drop the page table entry, then free the frame.
    fn evict(&mut self, victim: FrameId) -> Option<PageId> {
        if let Some(old) = self.frames[victim].resident_page() {
            self.page_table.remove(&old);
        }
        self.frames.deallocate(victim)
    }

    // ========================================================================
    // Public API: Read accessors
    // ========================================================================

    /// Aggregate figures since the last reset.
    ///
    /// # Errors
    /// `Error::Uninitialized` before `initialize`.
    pub fn get_statistics(&self) -> Result<Statistics> {
        let config = self.config.ok_or(Error::Uninitialized)?;
        Ok(Statistics::from_counters(
            self.counters,
            self.frames.allocated_count(),
            self.frames.len(),
            config.policy(),
        ))
    }

    /// Per-frame metadata in frame order.
    pub fn get_memory_state(&self) -> Vec<FrameState> {
        self.frames.states()
    }

    /// Copy of the page table.
    pub fn get_page_table(&self) -> HashMap<PageId, FrameId> {
        self.page_table.clone()
    }

    /// All step records since the last reset, oldest first.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// CRC32 fingerprint of the history.
    pub fn history_fingerprint(&self) -> u32 {
        history_fingerprint(&self.history)
    }

    pub fn reference_string(&self) -> &[PageId] {
        &self.reference_string
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn config(&self) -> Option<SimulatorConfig> {
        self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// Current logical time (number of steps since the last reset).
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Current CLOCK hand position.
    pub fn clock_hand(&self) -> usize {
        self.selector.clock_hand()
    }

    /// Raw counters.
    pub fn counters(&self) -> AccessCounters {
        self.counters
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Page table and frame store agree in both directions.
    fn page_table_consistent(&self) -> bool {
        let forward = self
            .page_table
            .iter()
            .all(|(&page, &fid)| self.frames.get(fid).and_then(|f| f.resident_page()) == Some(page));
        let backward = self.frames.iter().all(|f| match f.resident_page() {
            Some(page) => self.page_table.get(&page) == Some(&f.frame_index()),
            None => true,
        });
        forward && backward && self.page_table.len() == self.frames.allocated_count()
    }
}

impl Default for MemorySimulator {
    fn default() -> Self {
        Self::new()
    }
}
