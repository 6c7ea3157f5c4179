//! Per-candidate cost model.
//!
//! For every unvisited stop the planner asks "what would it cost to go there
//! next?".  [`LegCost`] holds the raw per-km quantities for the hop;
//! [`ScoringContext::score`] folds them into one scalar according to the
//! active [`Objective`].
//!
//! ```text
//! fastest      time * pf
//! lowest_cost  cost * (1 + 0.4 * weight_norm) * pf
//! lowest_co2   co2  * (1 + 0.3 * (pf - 1))
//! pareto       pf * (w_t * time + w_c * cost_with_weight + w_e * co2_with_priority)
//! ```
//!
//! `pf` is the priority factor, `weight_norm` the parcel weight divided by
//! the heaviest parcel in the run.

use courier_core::{DeliveryStop, GeoPoint, TransportProfile, haversine_km};

use crate::objective::{Objective, ParetoWeights, PriorityWeights};

/// Heavy-parcel surcharge applied to cost at `weight_norm == 1`.
const WEIGHT_COST_PENALTY: f64 = 0.4;
/// Strength of the priority adjustment on emissions.
const PRIORITY_CO2_DAMPING: f64 = 0.3;

// ── LegCost ───────────────────────────────────────────────────────────────────

/// Raw distance, time, cost and emissions of one hop.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LegCost {
    pub distance_km: f64,
    pub time_hours:  f64,
    pub cost:        f64,
    pub co2:         f64,
}

impl LegCost {
    /// Cost of travelling `from → to` with `profile`.
    pub fn between(from: GeoPoint, to: GeoPoint, profile: &TransportProfile) -> Self {
        let distance_km = haversine_km(from, to);
        Self {
            distance_km,
            time_hours: profile.hours_for(distance_km),
            cost:       profile.cost_for(distance_km),
            co2:        profile.co2_for(distance_km),
        }
    }
}

/// A stop together with its hop cost and objective score.
#[derive(Copy, Clone, Debug)]
pub struct ScoredCandidate<'s> {
    pub stop:  &'s DeliveryStop,
    pub leg:   LegCost,
    pub score: f64,
}

// ── ScoringContext ────────────────────────────────────────────────────────────

/// Everything the score of a candidate depends on besides the candidate and
/// the current position.  Built once per run.
#[derive(Copy, Clone, Debug)]
pub struct ScoringContext<'a> {
    pub profile:          &'a TransportProfile,
    pub objective:        Objective,
    pub priority_weights: &'a PriorityWeights,
    pub pareto_weights:   &'a ParetoWeights,
    /// Heaviest positive parcel weight in the run, or `1.0` if none is positive.
    pub max_weight_kg:    f64,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        profile:          &'a TransportProfile,
        objective:        Objective,
        priority_weights: &'a PriorityWeights,
        pareto_weights:   &'a ParetoWeights,
        stops:            &[DeliveryStop],
    ) -> Self {
        Self {
            profile,
            objective,
            priority_weights,
            pareto_weights,
            max_weight_kg: max_weight_kg(stops),
        }
    }

    /// Score `candidate` as the next stop after `from`.  Lower is better.
    pub fn score<'s>(&self, candidate: &'s DeliveryStop, from: GeoPoint) -> ScoredCandidate<'s> {
        let leg = LegCost::between(from, candidate.location, self.profile);
        let priority_factor = self.priority_weights.factor(candidate.priority);
        let weight_norm = candidate.weight_kg / self.max_weight_kg;

        ScoredCandidate {
            stop: candidate,
            leg,
            score: objective_score(self.objective, &leg, priority_factor, weight_norm, self.pareto_weights),
        }
    }
}

/// Normalisation denominator: the largest positive weight, `1.0` when every
/// weight is zero (so `weight_norm` is 0 for all stops).
pub fn max_weight_kg(stops: &[DeliveryStop]) -> f64 {
    stops
        .iter()
        .map(|s| s.weight_kg)
        .filter(|&w| w > 0.0)
        .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |m| m.max(w))))
        .unwrap_or(1.0)
}

/// The objective formulas, isolated from distance computation.
pub fn objective_score(
    objective:       Objective,
    leg:             &LegCost,
    priority_factor: f64,
    weight_norm:     f64,
    pareto:          &ParetoWeights,
) -> f64 {
    let cost_with_weight = || leg.cost * (1.0 + WEIGHT_COST_PENALTY * weight_norm);
    let co2_with_priority = || leg.co2 * (1.0 + PRIORITY_CO2_DAMPING * (priority_factor - 1.0));

    match objective {
        Objective::Fastest    => leg.time_hours * priority_factor,
        Objective::LowestCost => cost_with_weight() * priority_factor,
        Objective::LowestCo2  => co2_with_priority(),
        Objective::Pareto => {
            priority_factor
                * (pareto.time * leg.time_hours
                    + pareto.cost * cost_with_weight()
                    + pareto.co2 * co2_with_priority())
        }
    }
}
