//! pagesim - A page-replacement policy simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          ComparisonReporter (sim/comparison.rs)          │   │
//! │  │      FIFO → LRU → Optimal, one trace copy per policy     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          SimulationRunner (sim/runner.rs)                │   │
//! │  │    StepSnapshot per reference + Tally → RunResult        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Replacer (sim/replacer/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: FIFO | LRU | Optimal     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │         FrameStore (fixed-capacity resident set)         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - Frame store, replacement policies, runner and metrics
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, PolicyKind, ReferenceTrace};
//!
//! let trace: ReferenceTrace = "1,2,3,4,1,2,5,1,2,3,4,5".parse().unwrap();
//! let table = compare(&trace, 3).unwrap();
//!
//! assert_eq!(table.get(PolicyKind::Fifo).unwrap().faults, 9);
//! assert_eq!(table.get(PolicyKind::Lru).unwrap().faults, 10);
//! assert_eq!(table.get(PolicyKind::Optimal).unwrap().faults, 7);
//! println!("{}", table);
//! ```

pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_FRAME_SIZE;
pub use common::{Error, FrameId, PageId, Result};

pub use sim::{
    compare, simulate, Access, ComparisonReporter, ComparisonTable, FrameStore, PolicyKind,
    ReferenceTrace, Replacer, RunResult, Simulation, SimulationRunner, StepSnapshot, Tally,
};
