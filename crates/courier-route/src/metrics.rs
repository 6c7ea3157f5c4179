//! Per-selection metrics.

use courier_core::Depot;

use crate::observer::RouteObserver;
use crate::route::{RouteLeg, Totals};

/// What happened in one selection round of the greedy loop.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRecord {
    /// 1-based selection round.
    pub iteration:           usize,
    pub selected_customer:   String,
    pub raw_distance_km:     f64,
    /// The winning objective score.
    pub weighted_score:      f64,
    pub cumulative_distance: f64,
    pub cumulative_time:     f64,
    pub cumulative_cost:     f64,
    pub cumulative_co2:      f64,
}

impl MetricRecord {
    /// Build the record for `leg`, with `totals` already including it.
    pub fn new(iteration: usize, leg: &RouteLeg, score: f64, totals: &Totals) -> Self {
        Self {
            iteration,
            selected_customer:   leg.customer.clone(),
            raw_distance_km:     leg.distance_from_prev_km,
            weighted_score:      score,
            cumulative_distance: totals.distance_km,
            cumulative_time:     totals.time_hours,
            cumulative_cost:     totals.cost,
            cumulative_co2:      totals.co2,
        }
    }
}

/// A [`RouteObserver`] that keeps every [`MetricRecord`] in order.
///
/// Useful when a caller drives [`RouteRun::step`][crate::RouteRun::step]
/// itself and wants the records without finishing the run.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    records: Vec<MetricRecord>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MetricRecord> {
        self.records
    }
}

impl RouteObserver for MetricsRecorder {
    fn on_route_start(&mut self, _depot: &Depot, stop_count: usize) {
        self.records.clear();
        self.records.reserve(stop_count);
    }

    fn on_selection(&mut self, _leg: &RouteLeg, metric: &MetricRecord) {
        self.records.push(metric.clone());
    }
}
