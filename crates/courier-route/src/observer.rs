//! Route observer trait for logging, persistence, and data collection.

use courier_core::Depot;

use crate::metrics::MetricRecord;
use crate::route::{RouteLeg, Totals};

/// Callbacks invoked by [`RoutePlanner::run_observed`][crate::RoutePlanner::run_observed]
/// as the route is built.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl RouteObserver for Progress {
///     fn on_selection(&mut self, leg: &RouteLeg, metric: &MetricRecord) {
///         println!("#{} {} (+{:.2} km)", metric.iteration, leg.customer, leg.distance_from_prev_km);
///     }
/// }
/// ```
pub trait RouteObserver {
    /// Called once before the first selection round.
    fn on_route_start(&mut self, _depot: &Depot, _stop_count: usize) {}

    /// Called after each stop is chosen and folded into the totals.
    fn on_selection(&mut self, _leg: &RouteLeg, _metric: &MetricRecord) {}

    /// Called once with the terminal leg back to the depot.
    fn on_return(&mut self, _leg: &RouteLeg) {}

    /// Called once after the depot return, with the final totals.
    fn on_route_end(&mut self, _totals: &Totals) {}
}

/// A [`RouteObserver`] that does nothing.
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}

impl<O: RouteObserver + ?Sized> RouteObserver for &mut O {
    fn on_route_start(&mut self, depot: &Depot, stop_count: usize) {
        (**self).on_route_start(depot, stop_count);
    }

    fn on_selection(&mut self, leg: &RouteLeg, metric: &MetricRecord) {
        (**self).on_selection(leg, metric);
    }

    fn on_return(&mut self, leg: &RouteLeg) {
        (**self).on_return(leg);
    }

    fn on_route_end(&mut self, totals: &Totals) {
        (**self).on_route_end(totals);
    }
}
