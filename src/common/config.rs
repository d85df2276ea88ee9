//! Configuration constants for pagesim.

/// Smallest frame pool a simulation accepts.
///
/// A pool with zero frames could never hold a page, so every reference
/// would fault without ever being installed.
pub const MIN_FRAME_SIZE: usize = 1;

/// Frame pool size used by demos and benchmarks when none is given.
///
/// Three frames is the textbook setting for the Belady-anomaly trace
/// `1,2,3,4,1,2,5,1,2,3,4,5`.
pub const DEFAULT_FRAME_SIZE: usize = 3;

/// Separator between page numbers in a textual reference trace.
pub const TRACE_SEPARATOR: char = ',';

/// Width of each column in rendered result tables.
pub const COLUMN_WIDTH: usize = 15;

/// Length of the horizontal rule under a table header.
pub const RULE_WIDTH: usize = 90;

/// Decimal places shown for hit/fault percentages.
pub const RATIO_PRECISION: usize = 2;
