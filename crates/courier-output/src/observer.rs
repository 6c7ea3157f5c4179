//! `RouteOutputObserver<W>` bridges `RouteObserver` to an `OutputWriter`.

use courier_route::{MetricRecord, PlannedRoute, RouteLeg, RouteObserver, Totals};

use crate::row::{MetricRow, RouteLegRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RouteObserver`] that writes every leg, every metric row and the final
/// totals to any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `RouteObserver`
/// methods have no return value.  After `run_observed` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RouteOutputObserver<W: OutputWriter> {
    writer:     W,
    legs:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RouteOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, legs: 0, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of legs handed to the writer so far.
    pub fn legs_written(&self) -> usize {
        self.legs
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Feed an already built route through the same hooks a live run uses.
    ///
    /// Lets a second backend receive a route without planning it again.
    pub fn replay(&mut self, route: &PlannedRoute) {
        for (leg, metric) in route.deliveries().iter().zip(&route.metrics) {
            self.on_selection(leg, metric);
        }
        if let Some(leg) = route.depot_return() {
            self.on_return(leg);
        }
        self.on_route_end(&route.totals);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RouteObserver for RouteOutputObserver<W> {
    fn on_selection(&mut self, leg: &RouteLeg, metric: &MetricRecord) {
        let result = self.writer.write_leg(&RouteLegRow::from(leg));
        self.store_err(result);
        let result = self.writer.write_metric(&MetricRow::from(metric));
        self.store_err(result);
        self.legs += 1;
    }

    fn on_return(&mut self, leg: &RouteLeg) {
        let result = self.writer.write_leg(&RouteLegRow::from(leg));
        self.store_err(result);
        self.legs += 1;
    }

    fn on_route_end(&mut self, totals: &Totals) {
        let result = self.writer.write_totals(totals);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
