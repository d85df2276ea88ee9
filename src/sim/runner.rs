//! Simulation runner - drives one policy over a whole trace.

use std::fmt;

use tracing::debug;

use crate::common::config::MIN_FRAME_SIZE;
use crate::common::{Error, PageId, Result};
use crate::sim::replacer::{Access, PolicyKind};
use crate::sim::{FrameStore, RunResult, Tally};

/// Frame contents right after one reference was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSnapshot {
    /// Position of the reference in the trace.
    pub index: usize,

    /// Page that was referenced.
    pub reference: PageId,

    /// Whether it hit, and what it evicted if it faulted.
    pub access: Access,

    /// Residents in slot order.
    pub frames: Vec<PageId>,
}

impl fmt::Display for StepSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frames: [")?;
        for (i, page) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}

/// Everything one run produces: per-step progression plus final metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub policy: PolicyKind,
    pub steps: Vec<StepSnapshot>,
    pub result: RunResult,
}

/// Runs a single replacement policy with a fixed frame pool size.
///
/// The runner holds only configuration. Frame and policy state are built
/// fresh inside every [`run`](SimulationRunner::run) call and dropped when
/// it returns, so one runner can be reused without runs seeing each other.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, ReferenceTrace, SimulationRunner};
///
/// let trace: ReferenceTrace = "1,2,3,4,1,2,5,1,2,3,4,5".parse().unwrap();
/// let runner = SimulationRunner::new(PolicyKind::Optimal, 3).unwrap();
/// let sim = runner.run(&trace).unwrap();
///
/// assert_eq!(sim.result.faults, 7);
/// assert_eq!(sim.steps.len(), trace.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRunner {
    policy: PolicyKind,
    frame_size: usize,
}

impl SimulationRunner {
    /// Create a runner.
    ///
    /// # Errors
    /// `Error::InvalidFrameSize` if `frame_size` is zero.
    pub fn new(policy: PolicyKind, frame_size: usize) -> Result<Self> {
        if frame_size < MIN_FRAME_SIZE {
            return Err(Error::InvalidFrameSize(frame_size));
        }
        Ok(Self { policy, frame_size })
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    #[inline]
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Simulate `trace` from an empty frame pool.
    ///
    /// # Errors
    /// - `Error::EmptyTrace` if `trace` has no references
    /// - `Error::CapacityExceeded` if the policy breaks the store contract
    pub fn run(&self, trace: &[PageId]) -> Result<Simulation> {
        if trace.is_empty() {
            return Err(Error::EmptyTrace);
        }

        debug!(
            policy = %self.policy,
            frame_size = self.frame_size,
            references = trace.len(),
            "starting run"
        );

        let mut frames = FrameStore::new(self.frame_size);
        let mut replacer = self.policy.replacer();
        let mut tally = Tally::new();
        let mut steps = Vec::with_capacity(trace.len());

        for (index, &page) in trace.iter().enumerate() {
            let suffix = &trace[index + 1..];
            let access = replacer.step(&mut frames, page, suffix)?;
            tally.record(access);

            steps.push(StepSnapshot {
                index,
                reference: page,
                access,
                frames: frames.snapshot(),
            });
        }

        let result = tally.finish()?;
        debug!(
            policy = %self.policy,
            hits = result.hits,
            faults = result.faults,
            "run complete"
        );

        Ok(Simulation {
            policy: self.policy,
            steps,
            result,
        })
    }
}

/// Convenience wrapper: validate and run in one call.
///
/// # Errors
/// `Error::InvalidFrameSize` is reported before `Error::EmptyTrace`.
pub fn simulate(policy: PolicyKind, trace: &[PageId], frame_size: usize) -> Result<Simulation> {
    SimulationRunner::new(policy, frame_size)?.run(trace)
}
