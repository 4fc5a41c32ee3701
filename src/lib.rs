//! pagesim - a page-frame simulator with interchangeable replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Drivers (driver, compare, workload)               │   │
//! │  │   step forward / run all / isolated policy comparison    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Replacement Engine (memory/)                   │   │
//! │  │   MemorySimulator + page table + clock + StepRecord      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | OPTIMAL | CLOCK |       │   │   │
//! │  │   │            RANDOM | LFU | MFU                   │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Frame Store (memory/frame*)                    │   │
//! │  │         FrameStore + PageFrame + FrameState              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Policy, Error, config)
//! - [`memory`] - Frame store, replacement engine and policies
//! - [`driver`] - Cursor-based stepping through a reference string
//! - [`compare`] - Isolated multi-policy comparison runs
//! - [`workload`] - Reference string parsing and generation
//!
//! # Quick Start
//! ```
//! use pagesim::{parse_reference_string, Driver, MemorySimulator, Policy};
//!
//! let mut sim = MemorySimulator::new();
//! sim.initialize(3, 1024, Policy::Fifo).unwrap();
//! sim.set_reference_string(parse_reference_string("1,2,3,4,1,2,5").unwrap());
//!
//! let mut driver = Driver::new(sim);
//! driver.run_all().unwrap();
//!
//! let stats = driver.simulator().get_statistics().unwrap();
//! assert_eq!(stats.page_faults, 7);
//! ```

pub mod common;
pub mod compare;
pub mod driver;
pub mod memory;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_PAGE_SIZE};
pub use common::{Error, FrameId, PageId, Policy, Result, SimulatorConfig};

pub use compare::{Comparison, ComparisonReport, PolicyOutcome};
pub use driver::Driver;
pub use memory::{
    Action, FrameState, FrameStore, MemorySimulator, PageFrame, Statistics, StepRecord,
};
pub use workload::{format_reference_string, generate_reference_string, parse_reference_string};
