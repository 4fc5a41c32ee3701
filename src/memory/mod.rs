//! Page-frame memory simulation.
//!
//! The simulator is the replacement engine: it owns a fixed frame store,
//! the page table and the logical clock, and processes one page request
//! per call.
//!
//! # Components
//! - [`MemorySimulator`] - The replacement engine
//! - [`FrameStore`] / [`PageFrame`] - The fixed slots and their metadata
//! - [`StepRecord`] - Immutable trace entry appended each step
//! - [`Statistics`] - Derived hit/fault figures
//! - [`policy`] - Victim selection implementations

mod frame;
mod frame_store;
pub mod policy;
mod simulator;
mod stats;
mod step;

pub use frame::{FrameState, PageFrame};
pub use frame_store::FrameStore;
pub use simulator::MemorySimulator;
pub use stats::{AccessCounters, Statistics};
pub use step::{history_fingerprint, Action, StepRecord};
