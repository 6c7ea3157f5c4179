//! Unit tests for courier-route.

use courier_core::{DeliveryStop, Depot, GeoPoint, Priority, TransportMode, TransportProfile};

use crate::{
    MetricRecord, NoopObserver, Objective, ParetoWeights, PlannedRoute, PriorityWeights,
    RETURN_TO_DEPOT, RouteBuilder, RouteError, RouteLeg, RouteObserver, RoutePlanner, RunPhase,
    Totals,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn planner(mode: TransportMode, objective: Objective) -> RoutePlanner {
    RouteBuilder::new(mode, objective).build().unwrap()
}

fn oslo_depot() -> Depot {
    Depot::new(59.90, 10.70)
}

/// A: 3.001 km from the depot, High.  B: 2.224 km from the depot, Medium.
fn oslo_stops() -> Vec<DeliveryStop> {
    vec![
        DeliveryStop::new("A", GeoPoint::new(59.91, 10.75), Priority::High, 1.0),
        DeliveryStop::new("B", GeoPoint::new(59.92, 10.70), Priority::Medium, 1.0),
    ]
}

/// 5 × 4 grid around the equator with mixed priorities and weights.
fn grid_stops() -> Vec<DeliveryStop> {
    let priorities = [Priority::High, Priority::Medium, Priority::Low];
    let mut stops = Vec::new();
    for i in 0..5 {
        for j in 0..4 {
            let n = i * 4 + j;
            stops.push(DeliveryStop::new(
                format!("Customer {n:03}"),
                GeoPoint::new(0.01 * i as f64 - 0.02, 0.013 * j as f64 - 0.02),
                priorities[n % 3],
                (n % 7) as f64 * 2.5,
            ));
        }
    }
    stops
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use super::*;
    use crate::scoring::{LegCost, max_weight_kg, objective_score};

    fn sample_leg() -> LegCost {
        LegCost { distance_km: 10.0, time_hours: 0.2, cost: 40.0, co2: 1200.0 }
    }

    #[test]
    fn formulas_per_objective() {
        let leg = sample_leg();
        let pareto = ParetoWeights::default();
        let score = |o| objective_score(o, &leg, 0.6, 0.5, &pareto);

        assert!(approx(score(Objective::Fastest), 0.12, 1e-12));
        assert!(approx(score(Objective::LowestCost), 40.0 * 1.2 * 0.6, 1e-9));
        assert!(approx(score(Objective::LowestCo2), 1200.0 * 0.88, 1e-9));
        // 0.6 * (0.5*0.2 + 0.3*48 + 0.2*1056)
        assert!(approx(score(Objective::Pareto), 135.42, 1e-9));
    }

    #[test]
    fn lowest_co2_ignores_weight() {
        let leg = sample_leg();
        let pareto = ParetoWeights::default();
        let light = objective_score(Objective::LowestCo2, &leg, 1.2, 0.0, &pareto);
        let heavy = objective_score(Objective::LowestCo2, &leg, 1.2, 1.0, &pareto);
        assert_eq!(light, heavy);
    }

    #[test]
    fn medium_priority_is_neutral_for_co2() {
        let leg = sample_leg();
        let s = objective_score(Objective::LowestCo2, &leg, 1.0, 0.3, &ParetoWeights::default());
        assert_eq!(s, leg.co2);
    }

    #[test]
    fn leg_cost_uses_profile_rates() {
        let car = TransportMode::Car.profile();
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let leg = LegCost::between(a, b, &car);
        assert!(approx(leg.distance_km, 111.19493, 1e-4));
        assert!(approx(leg.time_hours, leg.distance_km / 50.0, 1e-12));
        assert!(approx(leg.cost, leg.distance_km * 4.0, 1e-9));
        assert!(approx(leg.co2, leg.distance_km * 120.0, 1e-9));
    }

    #[test]
    fn max_weight_picks_largest_positive() {
        let mut stops = oslo_stops();
        stops[0].weight_kg = 3.0;
        stops[1].weight_kg = 7.5;
        assert_eq!(max_weight_kg(&stops), 7.5);
    }

    #[test]
    fn max_weight_defaults_to_one() {
        assert_eq!(max_weight_kg(&[]), 1.0);

        let mut stops = oslo_stops();
        for s in &mut stops {
            s.weight_kg = 0.0;
        }
        assert_eq!(max_weight_kg(&stops), 1.0);
    }
}

// ── Objective parsing and weight tables ───────────────────────────────────────

#[cfg(test)]
mod objective {
    use super::*;

    #[test]
    fn names_round_trip() {
        for o in Objective::ALL {
            assert_eq!(o.as_str().parse::<Objective>().unwrap(), o);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "quickest".parse::<Objective>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownObjective(ref s) if s == "quickest"));
    }

    #[test]
    fn lenient_lookup_falls_back_to_fastest() {
        assert_eq!(Objective::from_name("quickest"), Objective::Fastest);
        assert_eq!(Objective::from_name(""), Objective::Fastest);
        assert_eq!(Objective::from_name("pareto"), Objective::Pareto);
    }

    #[test]
    fn default_priority_factors() {
        let w = PriorityWeights::default();
        assert_eq!(w.factor(Priority::High), 0.6);
        assert_eq!(w.factor(Priority::Medium), 1.0);
        assert_eq!(w.factor(Priority::Low), 1.2);
    }
}

// ── RouteBuilder validation ───────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let p = planner(TransportMode::Bicycle, Objective::Pareto);
        assert_eq!(p.profile().name, "Bicycle");
        assert_eq!(p.objective(), Objective::Pareto);
        assert_eq!(*p.priority_weights(), PriorityWeights::default());
        assert_eq!(*p.pareto_weights(), ParetoWeights::default());
    }

    #[test]
    fn negative_priority_weight_errors() {
        let result = RouteBuilder::new(TransportMode::Car, Objective::Fastest)
            .priority_weights(PriorityWeights { high: -0.1, medium: 1.0, low: 1.2 })
            .build();
        assert!(matches!(result, Err(RouteError::Config(_))));
    }

    #[test]
    fn nan_pareto_weight_errors() {
        let result = RouteBuilder::new(TransportMode::Car, Objective::Pareto)
            .pareto_weights(ParetoWeights { time: f64::NAN, cost: 0.3, co2: 0.2 })
            .build();
        assert!(matches!(result, Err(RouteError::Config(_))));
    }

    #[test]
    fn zero_speed_literal_profile_errors() {
        let profile = TransportProfile {
            name:        "Stalled".into(),
            speed_kmh:   0.0,
            cost_per_km: 1.0,
            co2_per_km:  0.0,
        };
        let result = RouteBuilder::new(profile, Objective::Fastest).build();
        assert!(matches!(result, Err(RouteError::Core(_))));
    }

    #[test]
    fn custom_profile_accepted() {
        let profile = TransportProfile::new("Van", 40.0, 6.0, 180.0).unwrap();
        let p = RouteBuilder::new(profile.clone(), Objective::LowestCost).build().unwrap();
        assert_eq!(*p.profile(), profile);
    }
}

// ── Route construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod route_tests {
    use super::*;

    #[test]
    fn oslo_fastest_visits_high_priority_first() {
        let route = planner(TransportMode::Car, Objective::Fastest).run(&oslo_stops(), oslo_depot());

        assert_eq!(route.legs.len(), 3);
        assert_eq!(route.legs[0].customer, "A");
        assert_eq!(route.legs[1].customer, "B");
        assert_eq!(route.legs[2].customer, RETURN_TO_DEPOT);
        assert_eq!(route.legs[2].priority, None);
        assert_eq!(route.legs[2].location, oslo_depot().location);

        // A: 3.001425 km / 50 km/h * 0.6
        assert!(approx(route.metrics[0].weighted_score, 0.0360171, 1e-6));
        assert!(approx(route.legs[0].distance_from_prev_km, 3.001425, 1e-5));
        assert!(approx(route.legs[1].distance_from_prev_km, 3.000645, 1e-5));
        assert!(approx(route.legs[2].distance_from_prev_km, 2.223899, 1e-5));
        assert!(approx(route.totals.distance_km, 8.225969, 1e-5));
    }

    #[test]
    fn oslo_lowest_co2_visits_nearer_stop_first() {
        // A: 360.17 g * 0.88 = 316.95; B: 266.87 g * 1.0
        let route = planner(TransportMode::Car, Objective::LowestCo2).run(&oslo_stops(), oslo_depot());
        assert_eq!(route.visit_order(), ["B", "A"]);
    }

    #[test]
    fn zero_cost_profile_ties_keep_input_order() {
        let route = planner(TransportMode::Bicycle, Objective::LowestCost).run(&oslo_stops(), oslo_depot());
        assert_eq!(route.visit_order(), ["A", "B"]);
        assert!(route.metrics.iter().all(|m| m.weighted_score == 0.0));
        assert_eq!(route.totals.cost, 0.0);
        assert_eq!(route.totals.co2, 0.0);
    }

    #[test]
    fn equidistant_tie_resolves_to_first_encountered() {
        let stops = vec![
            DeliveryStop::new("North", GeoPoint::new(0.01, 0.0), Priority::Medium, 1.0),
            DeliveryStop::new("South", GeoPoint::new(-0.01, 0.0), Priority::Medium, 1.0),
        ];
        let route = planner(TransportMode::Car, Objective::Fastest).run(&stops, Depot::new(0.0, 0.0));
        assert_eq!(route.visit_order()[0], "North");

        let swapped: Vec<_> = stops.into_iter().rev().collect();
        let route = planner(TransportMode::Car, Objective::Fastest).run(&swapped, Depot::new(0.0, 0.0));
        assert_eq!(route.visit_order()[0], "South");
    }

    #[test]
    fn cost_and_time_objectives_disagree() {
        // Near: 1.0 km, heaviest parcel.  Far: 1.1 km, no weight.
        let stops = vec![
            DeliveryStop::new("Near", GeoPoint::new(0.009, 0.0), Priority::Medium, 25.0),
            DeliveryStop::new("Far", GeoPoint::new(-0.0099, 0.0), Priority::Medium, 0.0),
        ];
        let depot = Depot::new(0.0, 0.0);

        let fastest = planner(TransportMode::Car, Objective::Fastest).run(&stops, depot);
        let cheapest = planner(TransportMode::Car, Objective::LowestCost).run(&stops, depot);

        assert_eq!(fastest.visit_order()[0], "Near");
        assert_eq!(cheapest.visit_order()[0], "Far");
    }

    #[test]
    fn empty_input_yields_single_zero_leg() {
        let depot = oslo_depot();
        let route = planner(TransportMode::Car, Objective::Pareto).run(&[], depot);

        assert_eq!(route.legs.len(), 1);
        let leg = &route.legs[0];
        assert!(leg.is_depot_return());
        assert_eq!(leg.distance_from_prev_km, 0.0);
        assert_eq!(leg.cumulative_distance_km, 0.0);
        assert_eq!(leg.eta_hours, 0.0);
        assert_eq!(leg.cost, 0.0);
        assert_eq!(leg.co2, 0.0);
        assert!(route.metrics.is_empty());
        assert_eq!(route.totals, Totals::default());
        assert!(route.deliveries().is_empty());
    }

    #[test]
    fn every_stop_visited_exactly_once() {
        let stops = grid_stops();
        for objective in Objective::ALL {
            let route = planner(TransportMode::Car, objective).run(&stops, Depot::new(0.0, 0.0));
            assert_eq!(route.legs.len(), stops.len() + 1);
            assert_eq!(route.legs.last().unwrap().customer, RETURN_TO_DEPOT);

            let mut visited = route.visit_order();
            visited.sort_unstable();
            let mut expected: Vec<&str> = stops.iter().map(|s| s.customer.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(visited, expected, "objective {objective}");
        }
    }

    #[test]
    fn cumulative_distance_matches_totals() {
        let route = planner(TransportMode::Car, Objective::Pareto).run(&grid_stops(), Depot::new(0.0, 0.0));

        let mut running = 0.0;
        let mut prev = 0.0;
        for leg in &route.legs {
            running += leg.distance_from_prev_km;
            assert_eq!(leg.cumulative_distance_km, running);
            assert!(leg.cumulative_distance_km >= prev);
            prev = leg.cumulative_distance_km;
        }
        assert_eq!(route.legs.last().unwrap().cumulative_distance_km, route.totals.distance_km);
    }

    #[test]
    fn metrics_track_selections() {
        let route = planner(TransportMode::Car, Objective::LowestCost).run(&grid_stops(), Depot::new(0.0, 0.0));

        assert_eq!(route.metrics.len(), route.legs.len() - 1);
        for (i, (metric, leg)) in route.metrics.iter().zip(route.deliveries()).enumerate() {
            assert_eq!(metric.iteration, i + 1);
            assert_eq!(metric.selected_customer, leg.customer);
            assert_eq!(metric.raw_distance_km, leg.distance_from_prev_km);
            assert_eq!(metric.cumulative_distance, leg.cumulative_distance_km);
        }
        let last = route.metrics.last().unwrap();
        assert!(last.cumulative_time < route.totals.time_hours);
    }

    #[test]
    fn runs_are_deterministic() {
        let stops = grid_stops();
        let p = planner(TransportMode::Car, Objective::Pareto);
        let a = p.run(&stops, Depot::new(0.001, 0.002));
        let b = p.run(&stops, Depot::new(0.001, 0.002));
        assert_eq!(a, b);
    }

    #[test]
    fn input_is_not_mutated() {
        let stops = grid_stops();
        let before = stops.clone();
        planner(TransportMode::Walk, Objective::Fastest).run(&stops, Depot::new(0.0, 0.0));
        assert_eq!(stops, before);
    }
}

// ── Step-wise runs ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_phases {
    use super::*;

    #[test]
    fn phases_advance_to_done() {
        let p = planner(TransportMode::Car, Objective::Fastest);
        let stops = oslo_stops();
        let mut run = p.start(&stops, oslo_depot());

        assert_eq!(run.phase(), RunPhase::Running);
        assert_eq!(run.remaining(), 2);

        assert!(run.step(&mut NoopObserver));
        assert_eq!(run.phase(), RunPhase::Running);
        assert_eq!(run.legs()[0].customer, "A");

        assert!(run.step(&mut NoopObserver));
        assert_eq!(run.phase(), RunPhase::Returning);
        assert_eq!(run.remaining(), 0);

        assert!(run.step(&mut NoopObserver));
        assert_eq!(run.phase(), RunPhase::Done);
        assert!(!run.step(&mut NoopObserver));

        assert_eq!(run.finish().legs.len(), 3);
    }

    #[test]
    fn empty_run_starts_returning() {
        let p = planner(TransportMode::Car, Objective::Fastest);
        let run = p.start(&[], oslo_depot());
        assert_eq!(run.phase(), RunPhase::Returning);
    }

    #[test]
    fn finish_completes_partial_run() {
        let p = planner(TransportMode::Car, Objective::Fastest);
        let stops = grid_stops();
        let mut run = p.start(&stops, Depot::new(0.0, 0.0));
        run.step(&mut NoopObserver);

        let partial = run.finish();
        let full = p.run(&stops, Depot::new(0.0, 0.0));
        assert_eq!(partial, full);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::MetricsRecorder;

    #[derive(Default)]
    struct CountingObserver {
        starts:     usize,
        stop_count: usize,
        selections: Vec<String>,
        returns:    usize,
        ends:       usize,
        end_totals: Option<Totals>,
    }

    impl RouteObserver for CountingObserver {
        fn on_route_start(&mut self, _depot: &Depot, stop_count: usize) {
            self.starts += 1;
            self.stop_count = stop_count;
        }

        fn on_selection(&mut self, leg: &RouteLeg, metric: &MetricRecord) {
            assert_eq!(leg.customer, metric.selected_customer);
            self.selections.push(leg.customer.clone());
        }

        fn on_return(&mut self, leg: &RouteLeg) {
            assert!(leg.is_depot_return());
            self.returns += 1;
        }

        fn on_route_end(&mut self, totals: &Totals) {
            self.ends += 1;
            self.end_totals = Some(*totals);
        }
    }

    #[test]
    fn hooks_fire_in_order() {
        let mut obs = CountingObserver::default();
        let route = planner(TransportMode::Car, Objective::Fastest)
            .run_observed(&oslo_stops(), oslo_depot(), &mut obs);

        assert_eq!(obs.starts, 1);
        assert_eq!(obs.stop_count, 2);
        assert_eq!(obs.selections, ["A", "B"]);
        assert_eq!(obs.returns, 1);
        assert_eq!(obs.ends, 1);
        assert_eq!(obs.end_totals, Some(route.totals));
    }

    #[test]
    fn empty_run_still_returns() {
        let mut obs = CountingObserver::default();
        planner(TransportMode::Car, Objective::Fastest).run_observed(&[], oslo_depot(), &mut obs);
        assert!(obs.selections.is_empty());
        assert_eq!(obs.returns, 1);
        assert_eq!(obs.ends, 1);
    }

    #[test]
    fn recorder_matches_route_metrics() {
        let mut recorder = MetricsRecorder::new();
        let route = planner(TransportMode::Car, Objective::Pareto)
            .run_observed(&grid_stops(), Depot::new(0.0, 0.0), &mut recorder);
        assert_eq!(recorder.records(), route.metrics.as_slice());
        assert_eq!(recorder.into_records(), route.metrics);
    }
}

// ── Multi-depot runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod run_many {
    use super::*;

    #[test]
    fn one_route_per_depot_in_order() {
        let p = planner(TransportMode::Car, Objective::Fastest);
        let stops = grid_stops();
        let depots = [Depot::new(0.0, 0.0), Depot::new(0.05, 0.05), Depot::new(-0.03, 0.01)];

        let routes: Vec<PlannedRoute> = p.run_many(&stops, &depots);
        assert_eq!(routes.len(), depots.len());
        for (route, &depot) in routes.iter().zip(&depots) {
            assert_eq!(*route, p.run(&stops, depot));
            assert_eq!(route.depot_return().unwrap().location, depot.location);
        }
    }

    #[test]
    fn no_depots_no_routes() {
        let p = planner(TransportMode::Car, Objective::Fastest);
        assert!(p.run_many(&grid_stops(), &[]).is_empty());
    }
}
