//! Page-replacement simulation.
//!
//! Drives a replacement policy over a reference trace against a fixed pool
//! of frames and reports hit/fault statistics.
//!
//! # Components
//! - [`FrameStore`] - The resident set (a fixed number of frame slots)
//! - [`replacer`] - Eviction policy implementations (FIFO, LRU, Optimal)
//! - [`SimulationRunner`] - Runs one policy over one trace
//! - [`Tally`] / [`RunResult`] - Hit/fault counters and final metrics
//! - [`ComparisonReporter`] - Runs every policy on the same trace

mod comparison;
mod frame_store;
pub mod replacer;
mod runner;
mod stats;
mod trace;

pub use comparison::{compare, ComparisonReporter, ComparisonTable};
pub use frame_store::FrameStore;
pub use replacer::{Access, PolicyKind, Replacer};
pub use runner::{simulate, Simulation, SimulationRunner, StepSnapshot};
pub use stats::{RunResult, Tally};
pub use trace::ReferenceTrace;
