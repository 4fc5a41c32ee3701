//! Side-by-side comparison of replacement policies.
//!
//! Each policy runs in its own simulator on its own scoped thread over the
//! same reference string. Nothing is shared between runs except the
//! read-only reference slice; results are gathered under a mutex.

use std::fmt;
use std::thread;

use log::info;
use parking_lot::Mutex;

use crate::common::{PageId, Policy, Result, SimulatorConfig};
use crate::driver::Driver;
use crate::memory::{MemorySimulator, Statistics};

/// Policies compared when the caller does not choose.
pub const DEFAULT_COMPARISON: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Clock];

/// Builder for a comparison run.
///
/// # Example
/// ```
/// use pagesim::{parse_reference_string, Comparison, Policy};
///
/// let reference = parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
/// let report = Comparison::new(3, 1024).run(&reference).unwrap();
///
/// assert_eq!(report.best().unwrap().policy, Policy::Optimal);
/// println!("{}", report);
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    frame_count: usize,
    page_size: usize,
    policies: Vec<Policy>,
    seed: Option<u64>,
}

impl Comparison {
    pub fn new(frame_count: usize, page_size: usize) -> Self {
        Self {
            frame_count,
            page_size,
            policies: DEFAULT_COMPARISON.to_vec(),
            seed: None,
        }
    }

    /// Policies to run, reported in this order.
    pub fn policies(mut self, policies: &[Policy]) -> Self {
        self.policies = policies.to_vec();
        self
    }

    /// Seed for the RANDOM policy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run every policy over `reference`.
    ///
    /// # Errors
    /// `Error::Configuration` for a zero frame count or page size, checked
    /// before any run starts. Otherwise the first failing run's error.
    pub fn run(&self, reference: &[PageId]) -> Result<ComparisonReport> {
        SimulatorConfig::new(self.frame_count, self.page_size, Policy::default())?;

        let slots: Mutex<Vec<Option<Result<PolicyOutcome>>>> =
            Mutex::new(self.policies.iter().map(|_| None).collect());

        thread::scope(|scope| {
            for (slot, &policy) in self.policies.iter().enumerate() {
                let slots = &slots;
                scope.spawn(move || {
                    let outcome = self.run_one(policy, reference);
                    slots.lock()[slot] = Some(outcome);
                });
            }
        });

        let outcomes = slots
            .into_inner()
            .into_iter()
            .flatten()
            .collect::<Result<Vec<_>>>()?;

        for outcome in &outcomes {
            info!("compare: {}", outcome.statistics);
        }

        Ok(ComparisonReport {
            frame_count: self.frame_count,
            page_size: self.page_size,
            reference_len: reference.len(),
            outcomes,
        })
    }

    fn run_one(&self, policy: Policy, reference: &[PageId]) -> Result<PolicyOutcome> {
        let config = SimulatorConfig::new(self.frame_count, self.page_size, policy)?;
        let mut sim = MemorySimulator::with_config(config);
        if let Some(seed) = self.seed {
            sim.seed_rng(seed);
        }
        sim.set_reference_string(reference.to_vec());

        let mut driver = Driver::new(sim);
        driver.run_all()?;
        let sim = driver.into_inner();

        Ok(PolicyOutcome {
            policy,
            statistics: sim.get_statistics()?,
            fingerprint: sim.history_fingerprint(),
        })
    }
}

/// Result of one policy's isolated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyOutcome {
    pub policy: Policy,
    pub statistics: Statistics,
    /// CRC32 of the run's full history.
    pub fingerprint: u32,
}

/// All outcomes of a comparison, in requested policy order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub frame_count: usize,
    pub page_size: usize,
    pub reference_len: usize,
    pub outcomes: Vec<PolicyOutcome>,
}

impl ComparisonReport {
    /// First outcome for `policy`.
    pub fn get(&self, policy: Policy) -> Option<&PolicyOutcome> {
        self.outcomes.iter().find(|o| o.policy == policy)
    }

    /// Fewest page faults; the earliest listed policy wins ties.
    pub fn best(&self) -> Option<&PolicyOutcome> {
        self.outcomes.iter().min_by_key(|o| o.statistics.page_faults)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ALGORITHM COMPARISON RESULTS ({} frames, {} references)",
            self.frame_count, self.reference_len
        )?;
        writeln!(f, "{}", "=".repeat(50))?;
        for outcome in &self.outcomes {
            let stats = &outcome.statistics;
            writeln!(f, "{}:", outcome.policy)?;
            writeln!(f, "  Page Faults: {}", stats.page_faults)?;
            writeln!(f, "  Hit Ratio: {:.2}%", stats.hit_ratio * 100.0)?;
            writeln!(f, "  Fault Ratio: {:.2}%", stats.fault_ratio * 100.0)?;
        }
        Ok(())
    }
}
