//! Side-by-side comparison of every policy on one trace.

use std::fmt;

use tracing::debug;

use crate::common::config::{COLUMN_WIDTH, MIN_FRAME_SIZE, RULE_WIDTH};
use crate::common::{Error, PageId, Result};
use crate::sim::replacer::PolicyKind;
use crate::sim::runner::{Simulation, SimulationRunner};
use crate::sim::stats::percent;
use crate::sim::RunResult;

/// Results of all policies on the same trace, in evaluation order
/// (FIFO, LRU, Optimal).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<Simulation>,
}

impl ComparisonTable {
    /// Metrics for `policy`, if it was evaluated.
    pub fn get(&self, policy: PolicyKind) -> Option<&RunResult> {
        self.simulation(policy).map(|sim| &sim.result)
    }

    /// Full run (including step snapshots) for `policy`.
    pub fn simulation(&self, policy: PolicyKind) -> Option<&Simulation> {
        self.rows.iter().find(|sim| sim.policy == policy)
    }

    /// `(name, result)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RunResult)> + '_ {
        self.rows.iter().map(|sim| (sim.policy.name(), &sim.result))
    }

    /// Every run in evaluation order.
    pub fn simulations(&self) -> &[Simulation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Policy with the fewest faults; ties go to the earlier policy.
    pub fn fewest_faults(&self) -> Option<PolicyKind> {
        self.rows
            .iter()
            .fold(None::<&Simulation>, |best, sim| match best {
                Some(b) if b.result.faults <= sim.result.faults => Some(b),
                _ => Some(sim),
            })
            .map(|sim| sim.policy)
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$}",
            "Algorithm",
            "Page Hits",
            "Page Faults",
            "Hit Ratio",
            "Fault Ratio",
            w = COLUMN_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for (name, result) in self.iter() {
            writeln!(
                f,
                "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$}",
                name,
                result.hits,
                result.faults,
                percent(result.hit_ratio),
                percent(result.fault_ratio),
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Runs a set of policies over the same trace and frame size.
///
/// Each policy gets its own copy of the trace and its own runner, so no
/// state is shared between runs.
#[derive(Debug, Clone)]
pub struct ComparisonReporter {
    frame_size: usize,
    policies: Vec<PolicyKind>,
}

impl ComparisonReporter {
    /// Reporter for FIFO, LRU and Optimal.
    ///
    /// # Errors
    /// `Error::InvalidFrameSize` if `frame_size` is zero.
    pub fn new(frame_size: usize) -> Result<Self> {
        Self::with_policies(frame_size, &PolicyKind::ALL)
    }

    /// Reporter for a chosen subset of policies, evaluated in the given order.
    pub fn with_policies(frame_size: usize, policies: &[PolicyKind]) -> Result<Self> {
        if frame_size < MIN_FRAME_SIZE {
            return Err(Error::InvalidFrameSize(frame_size));
        }
        Ok(Self {
            frame_size,
            policies: policies.to_vec(),
        })
    }

    #[inline]
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Run every policy and collect the table.
    ///
    /// # Errors
    /// `Error::EmptyTrace` if `trace` has no references. Any run failure
    /// discards the whole table.
    pub fn compare(&self, trace: &[PageId]) -> Result<ComparisonTable> {
        if trace.is_empty() {
            return Err(Error::EmptyTrace);
        }
        debug!(
            frame_size = self.frame_size,
            policies = self.policies.len(),
            references = trace.len(),
            "comparing policies"
        );

        let rows = self
            .policies
            .iter()
            .map(|&policy| {
                let owned: Vec<PageId> = trace.to_vec();
                SimulationRunner::new(policy, self.frame_size)?.run(&owned)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ComparisonTable { rows })
    }
}

/// Convenience wrapper: compare all three policies in one call.
pub fn compare(trace: &[PageId], frame_size: usize) -> Result<ComparisonTable> {
    ComparisonReporter::new(frame_size)?.compare(trace)
}
