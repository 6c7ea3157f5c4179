//! Route output types: legs, running totals, and the finished route.

use courier_core::{GeoPoint, Priority};

use crate::metrics::MetricRecord;
use crate::scoring::LegCost;

/// Customer name carried by the terminal leg back to the depot.
pub const RETURN_TO_DEPOT: &str = "RETURN_TO_DEPOT";

/// One hop of the route, ending at a stop or (last leg) at the depot.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    pub customer:               String,
    pub location:               GeoPoint,
    /// `None` for the depot return.
    pub priority:               Option<Priority>,
    pub distance_from_prev_km:  f64,
    pub cumulative_distance_km: f64,
    pub eta_hours:              f64,
    pub cost:                   f64,
    pub co2:                    f64,
}

impl RouteLeg {
    #[inline]
    pub fn is_depot_return(&self) -> bool {
        self.priority.is_none() && self.customer == RETURN_TO_DEPOT
    }
}

/// Cumulative distance, time, cost and emissions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Totals {
    pub distance_km: f64,
    pub time_hours:  f64,
    pub cost:        f64,
    pub co2:         f64,
}

impl Totals {
    #[inline]
    pub fn add(&mut self, leg: &LegCost) {
        self.distance_km += leg.distance_km;
        self.time_hours  += leg.time_hours;
        self.cost        += leg.cost;
        self.co2         += leg.co2;
    }
}

impl std::fmt::Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} km, {:.3} h, cost {:.3}, co2 {:.3}",
            self.distance_km, self.time_hours, self.cost, self.co2
        )
    }
}

/// The planner's output.
///
/// `legs` holds one entry per delivery in visiting order followed by the
/// depot return; `metrics` holds one entry per selection round (the return
/// leg has none).
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedRoute {
    pub legs:    Vec<RouteLeg>,
    pub metrics: Vec<MetricRecord>,
    pub totals:  Totals,
}

impl PlannedRoute {
    /// Legs that end at a delivery (everything but the depot return).
    pub fn deliveries(&self) -> &[RouteLeg] {
        match self.legs.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Customer names in visiting order, depot return excluded.
    pub fn visit_order(&self) -> Vec<&str> {
        self.deliveries().iter().map(|l| l.customer.as_str()).collect()
    }

    pub fn depot_return(&self) -> Option<&RouteLeg> {
        self.legs.last()
    }
}
