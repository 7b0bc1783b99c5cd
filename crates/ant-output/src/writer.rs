//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ForagerSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the observer is generic
/// so alternative stores slot in without touching the sim).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of forager snapshots.
    fn write_snapshots(&mut self, rows: &[ForagerSnapshotRow]) -> OutputResult<()>;

    /// Write one summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
