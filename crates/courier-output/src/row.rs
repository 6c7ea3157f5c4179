//! Plain data row types written by output backends.

use courier_route::{MetricRecord, RouteLeg};

/// Priority cell written for the depot return leg.
pub const NO_PRIORITY: &str = "-";

/// One route leg, flattened for writing.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLegRow {
    pub customer:            String,
    pub lat:                 f64,
    pub lon:                 f64,
    /// `High`/`Medium`/`Low`, or [`NO_PRIORITY`] for the depot return.
    pub priority:            &'static str,
    pub distance_from_prev:  f64,
    pub cumulative_distance: f64,
    pub eta_hours:           f64,
    pub cost:                f64,
    pub co2:                 f64,
}

impl From<&RouteLeg> for RouteLegRow {
    fn from(leg: &RouteLeg) -> Self {
        Self {
            customer:            leg.customer.clone(),
            lat:                 leg.location.lat,
            lon:                 leg.location.lon,
            priority:            leg.priority.map_or(NO_PRIORITY, |p| p.as_str()),
            distance_from_prev:  leg.distance_from_prev_km,
            cumulative_distance: leg.cumulative_distance_km,
            eta_hours:           leg.eta_hours,
            cost:                leg.cost,
            co2:                 leg.co2,
        }
    }
}

/// One selection round of the greedy loop.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub iteration:           u64,
    pub selected_customer:   String,
    pub raw_distance:        f64,
    pub weighted_score:      f64,
    pub cumulative_distance: f64,
    pub cumulative_time:     f64,
    pub cumulative_cost:     f64,
    pub cumulative_co2:      f64,
}

impl From<&MetricRecord> for MetricRow {
    fn from(m: &MetricRecord) -> Self {
        Self {
            iteration:           m.iteration as u64,
            selected_customer:   m.selected_customer.clone(),
            raw_distance:        m.raw_distance_km,
            weighted_score:      m.weighted_score,
            cumulative_distance: m.cumulative_distance,
            cumulative_time:     m.cumulative_time,
            cumulative_cost:     m.cumulative_cost,
            cumulative_co2:      m.cumulative_co2,
        }
    }
}
