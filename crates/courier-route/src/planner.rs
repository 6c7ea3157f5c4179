//! The `RoutePlanner` and its greedy selection loop.

use courier_core::{DeliveryStop, Depot, GeoPoint, TransportProfile};
use tracing::{debug, info};

use crate::metrics::MetricRecord;
use crate::objective::{Objective, ParetoWeights, PriorityWeights};
use crate::route::{PlannedRoute, RETURN_TO_DEPOT, RouteLeg, Totals};
use crate::scoring::{LegCost, ScoredCandidate, ScoringContext};
use crate::{NoopObserver, RouteObserver};

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Greedy single-vehicle route constructor.
///
/// Starting at the depot, each round scores every unvisited stop against the
/// current position and moves to the one with the strictly smallest score.
/// When every stop is visited a final leg returns to the depot.
///
/// The planner itself is immutable; every call to [`run`][Self::run] builds
/// its own working set, so one planner can serve any number of depots (see
/// [`run_many`][Self::run_many]).
///
/// Create via [`RouteBuilder`][crate::RouteBuilder].
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    pub(crate) profile:          TransportProfile,
    pub(crate) objective:        Objective,
    pub(crate) priority_weights: PriorityWeights,
    pub(crate) pareto_weights:   ParetoWeights,
}

impl RoutePlanner {
    pub fn profile(&self) -> &TransportProfile {
        &self.profile
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn priority_weights(&self) -> &PriorityWeights {
        &self.priority_weights
    }

    pub fn pareto_weights(&self) -> &ParetoWeights {
        &self.pareto_weights
    }

    /// Build the route for `stops` starting and ending at `depot`.
    pub fn run(&self, stops: &[DeliveryStop], depot: Depot) -> PlannedRoute {
        self.run_observed(stops, depot, &mut NoopObserver)
    }

    /// Like [`run`][Self::run], calling `observer` hooks as legs are produced.
    pub fn run_observed<O: RouteObserver>(
        &self,
        stops:    &[DeliveryStop],
        depot:    Depot,
        observer: &mut O,
    ) -> PlannedRoute {
        let mut run = self.start(stops, depot);
        observer.on_route_start(&depot, stops.len());
        while run.step(observer) {}
        observer.on_route_end(&run.totals);

        let route = run.finish();
        info!(
            objective = %self.objective,
            mode      = %self.profile.name,
            stops     = stops.len(),
            totals    = %route.totals,
            "route complete"
        );
        route
    }

    /// Begin a step-wise run.  Drive it with [`RouteRun::step`].
    pub fn start<'a>(&'a self, stops: &'a [DeliveryStop], depot: Depot) -> RouteRun<'a> {
        RouteRun::new(self, stops, depot)
    }

    /// Plan one route per depot over the same stop list.
    ///
    /// With the `parallel` Cargo feature the routes are built on Rayon's
    /// thread pool.  Results are in `depots` order either way.
    pub fn run_many(&self, stops: &[DeliveryStop], depots: &[Depot]) -> Vec<PlannedRoute> {
        #[cfg(not(feature = "parallel"))]
        {
            depots.iter().map(|&depot| self.run(stops, depot)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            depots.par_iter().map(|&depot| self.run(stops, depot)).collect()
        }
    }
}

// ── RouteRun ──────────────────────────────────────────────────────────────────

/// Where a [`RouteRun`] is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunPhase {
    /// Unvisited stops remain; the next step selects one.
    Running,
    /// Every stop is visited; the next step appends the depot return.
    Returning,
    /// The route is complete.  Further steps do nothing.
    Done,
}

/// In-progress state of one route construction.
///
/// `unvisited` starts as the full stop list in input order and shrinks by one
/// per selection; removal preserves the order of the remainder so ties keep
/// resolving to the earliest input row.
pub struct RouteRun<'a> {
    ctx:       ScoringContext<'a>,
    depot:     Depot,
    unvisited: Vec<&'a DeliveryStop>,
    position:  GeoPoint,
    iteration: usize,
    phase:     RunPhase,
    legs:      Vec<RouteLeg>,
    metrics:   Vec<MetricRecord>,
    totals:    Totals,
}

impl<'a> RouteRun<'a> {
    fn new(planner: &'a RoutePlanner, stops: &'a [DeliveryStop], depot: Depot) -> Self {
        let ctx = ScoringContext::new(
            &planner.profile,
            planner.objective,
            &planner.priority_weights,
            &planner.pareto_weights,
            stops,
        );
        Self {
            ctx,
            depot,
            unvisited: stops.iter().collect(),
            position:  depot.location,
            iteration: 1,
            phase:     if stops.is_empty() { RunPhase::Returning } else { RunPhase::Running },
            legs:      Vec::with_capacity(stops.len() + 1),
            metrics:   Vec::with_capacity(stops.len()),
            totals:    Totals::default(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn remaining(&self) -> usize {
        self.unvisited.len()
    }

    /// Advance by one leg.  Returns `false` once the run is [`RunPhase::Done`].
    pub fn step<O: RouteObserver>(&mut self, observer: &mut O) -> bool {
        match self.phase {
            RunPhase::Running => {
                self.select_next(observer);
                if self.unvisited.is_empty() {
                    self.phase = RunPhase::Returning;
                }
                true
            }
            RunPhase::Returning => {
                self.return_to_depot(observer);
                self.phase = RunPhase::Done;
                true
            }
            RunPhase::Done => false,
        }
    }

    /// Consume the run.  Unfinished runs are driven to completion first.
    pub fn finish(mut self) -> PlannedRoute {
        while self.step(&mut NoopObserver) {}
        PlannedRoute {
            legs:    self.legs,
            metrics: self.metrics,
            totals:  self.totals,
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn select_next<O: RouteObserver>(&mut self, observer: &mut O) {
        let Some((idx, best)) = self.best_candidate() else {
            return;
        };

        self.totals.add(&best.leg);
        let stop = best.stop;
        let leg = RouteLeg {
            customer:               stop.customer.clone(),
            location:               stop.location,
            priority:               Some(stop.priority),
            distance_from_prev_km:  best.leg.distance_km,
            cumulative_distance_km: self.totals.distance_km,
            eta_hours:              best.leg.time_hours,
            cost:                   best.leg.cost,
            co2:                    best.leg.co2,
        };
        let metric = MetricRecord::new(self.iteration, &leg, best.score, &self.totals);

        debug!(
            iteration = self.iteration,
            customer  = %leg.customer,
            distance  = leg.distance_from_prev_km,
            score     = best.score,
            "selected stop"
        );
        observer.on_selection(&leg, &metric);

        self.legs.push(leg);
        self.metrics.push(metric);
        self.position = stop.location;
        self.unvisited.remove(idx);
        self.iteration += 1;
    }

    /// Index and score of the strictly smallest-scoring unvisited stop.  The
    /// first candidate is always taken so a non-finite score cannot leave the
    /// round without a selection.
    fn best_candidate(&self) -> Option<(usize, ScoredCandidate<'a>)> {
        let mut best: Option<(usize, ScoredCandidate<'a>)> = None;
        for (idx, &stop) in self.unvisited.iter().enumerate() {
            let candidate = self.ctx.score(stop, self.position);
            let better = match &best {
                None => true,
                Some((_, current)) => candidate.score < current.score,
            };
            if better {
                best = Some((idx, candidate));
            }
        }
        best
    }

    fn return_to_depot<O: RouteObserver>(&mut self, observer: &mut O) {
        let cost = LegCost::between(self.position, self.depot.location, self.ctx.profile);
        self.totals.add(&cost);
        let leg = RouteLeg {
            customer:               RETURN_TO_DEPOT.to_owned(),
            location:               self.depot.location,
            priority:               None,
            distance_from_prev_km:  cost.distance_km,
            cumulative_distance_km: self.totals.distance_km,
            eta_hours:              cost.time_hours,
            cost:                   cost.cost,
            co2:                    cost.co2,
        };
        debug!(distance = leg.distance_from_prev_km, "returning to depot");
        observer.on_return(&leg);
        self.position = self.depot.location;
        self.legs.push(leg);
    }
}
