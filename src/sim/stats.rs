//! Hit/fault tallies and per-run metrics.

use std::fmt;

use crate::common::config::{COLUMN_WIDTH, RATIO_PRECISION};
use crate::common::{Error, Result};
use crate::sim::replacer::Access;

/// Running hit/fault counters for one simulation.
///
/// Plain counters: a run is single-threaded and owns its tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// References that found their page resident.
    pub hits: u64,

    /// References that had to install their page.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl Tally {
    /// Create a tally with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one access outcome.
    pub fn record(&mut self, access: Access) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Total references counted so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Reduce the tally to a [`RunResult`].
    ///
    /// # Errors
    /// `Error::EmptyTrace` if nothing was counted; ratios are undefined
    /// there.
    pub fn finish(&self) -> Result<RunResult> {
        let total = self.total();
        if total == 0 {
            return Err(Error::EmptyTrace);
        }

        Ok(RunResult {
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
            hit_ratio: self.hits as f64 / total as f64,
            fault_ratio: self.faults as f64 / total as f64,
            total_references: total,
        })
    }
}

/// Final metrics of one policy over one trace.
///
/// `hits + faults == total_references` always holds, and the two ratios
/// sum to 1.0 up to float rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
    pub total_references: u64,
}

impl RunResult {
    /// Column headings matching [`RunResult::render_row`].
    pub fn header() -> String {
        format!(
            "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$} {:<w$}",
            "Algorithm",
            "Page Hits",
            "Page Faults",
            "Hit Ratio",
            "Fault Ratio",
            "Total Pages",
            w = COLUMN_WIDTH
        )
    }

    /// One table row labelled `name`, ratios shown as percentages.
    pub fn render_row(&self, name: &str) -> String {
        format!(
            "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$} {:<w$}",
            name,
            self.hits,
            self.faults,
            percent(self.hit_ratio),
            percent(self.fault_ratio),
            self.total_references,
            w = COLUMN_WIDTH
        )
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {} }}",
            self.hits,
            self.faults,
            self.evictions,
            percent(self.hit_ratio)
        )
    }
}

/// Format a 0.0..=1.0 ratio as a percentage, e.g. `0.25` -> `"25.00%"`.
pub(crate) fn percent(ratio: f64) -> String {
    format!("{:.p$}%", ratio * 100.0, p = RATIO_PRECISION)
}
