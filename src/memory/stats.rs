//! Simulation statistics.

use std::fmt;

use crate::common::Policy;

/// Running counters owned by the simulator.
///
/// `hits + page_faults` always equals the number of steps executed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccessCounters {
    /// Requests satisfied by a resident page.
    pub hits: u64,

    /// Requests for a page that was not resident.
    pub page_faults: u64,

    /// Faults that had to displace a resident page.
    pub evictions: u64,
}

impl AccessCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_accesses(&self) -> u64 {
        self.hits + self.page_faults
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A point-in-time snapshot of simulation statistics.
///
/// Ratios are 0 when nothing has been accessed yet.
///
/// # Example
/// ```
/// use pagesim::{MemorySimulator, PageId, Policy};
///
/// let mut sim = MemorySimulator::new();
/// sim.initialize(2, 1024, Policy::Lru).unwrap();
/// sim.simulate_step(PageId(1)).unwrap();
/// sim.simulate_step(PageId(1)).unwrap();
///
/// let stats = sim.get_statistics().unwrap();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.hit_ratio, 0.5);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_accesses: u64,
    pub hits: u64,
    pub page_faults: u64,
    pub evictions: u64,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
    /// Allocated frames divided by total frames.
    pub memory_utilization: f64,
    pub policy: Policy,
}

impl Statistics {
    /// Derive ratios from raw counters and frame occupancy.
    pub fn from_counters(
        counters: AccessCounters,
        allocated_frames: usize,
        total_frames: usize,
        policy: Policy,
    ) -> Self {
        let total = counters.total_accesses();
        let (hit_ratio, fault_ratio) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                counters.hits as f64 / total as f64,
                counters.page_faults as f64 / total as f64,
            )
        };
        let memory_utilization = if total_frames == 0 {
            0.0
        } else {
            allocated_frames as f64 / total_frames as f64
        };

        Self {
            total_accesses: total,
            hits: counters.hits,
            page_faults: counters.page_faults,
            evictions: counters.evictions,
            hit_ratio,
            fault_ratio,
            memory_utilization,
            policy,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ policy: {}, accesses: {}, hits: {}, faults: {}, evictions: {}, hit_ratio: {:.2}%, fault_ratio: {:.2}%, utilization: {:.2}% }}",
            self.policy,
            self.total_accesses,
            self.hits,
            self.page_faults,
            self.evictions,
            self.hit_ratio * 100.0,
            self.fault_ratio * 100.0,
            self.memory_utilization * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_total() {
        let counters = AccessCounters {
            hits: 7,
            page_faults: 3,
            evictions: 1,
        };
        assert_eq!(counters.total_accesses(), 10);
    }

    #[test]
    fn test_counters_reset() {
        let mut counters = AccessCounters {
            hits: 100,
            page_faults: 4,
            evictions: 2,
        };
        counters.reset();
        assert_eq!(counters, AccessCounters::new());
    }

    #[test]
    fn test_statistics_zero_accesses() {
        let stats = Statistics::from_counters(AccessCounters::new(), 0, 4, Policy::Fifo);
        assert_eq!(stats.total_accesses, 0);
        assert_eq!(stats.hit_ratio, 0.0);
        assert_eq!(stats.fault_ratio, 0.0);
        assert_eq!(stats.memory_utilization, 0.0);
    }

    #[test]
    fn test_statistics_ratios() {
        let counters = AccessCounters {
            hits: 7,
            page_faults: 3,
            evictions: 0,
        };
        let stats = Statistics::from_counters(counters, 3, 4, Policy::Lru);

        assert_eq!(stats.hit_ratio, 0.7);
        assert!((stats.hit_ratio + stats.fault_ratio - 1.0).abs() < 1e-12);
        assert_eq!(stats.memory_utilization, 0.75);
    }

    #[test]
    fn test_statistics_display() {
        let counters = AccessCounters {
            hits: 80,
            page_faults: 20,
            evictions: 5,
        };
        let display = format!("{}", Statistics::from_counters(counters, 4, 4, Policy::Clock));

        assert!(display.contains("policy: CLOCK"));
        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
