//! The `OutputWriter` trait implemented by all backend writers.

use courier_route::Totals;

use crate::{MetricRow, OutputResult, RouteLegRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`RouteOutputObserver::take_error`][crate::RouteOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one route leg, in visiting order.
    fn write_leg(&mut self, row: &RouteLegRow) -> OutputResult<()>;

    /// Write one selection-round metric row.
    fn write_metric(&mut self, row: &MetricRow) -> OutputResult<()>;

    /// Record the final totals.  Backends without a totals table ignore them.
    fn write_totals(&mut self, _totals: &Totals) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
