//! Fluent builder for constructing a [`RoutePlanner`].

use courier_core::TransportProfile;

use crate::objective::{Objective, ParetoWeights, PriorityWeights};
use crate::{RoutePlanner, RouteResult};

/// Fluent builder for [`RoutePlanner`].
///
/// # Required inputs
///
/// - [`TransportProfile`] (or a [`TransportMode`][courier_core::TransportMode]
///   preset, which converts into one)
/// - [`Objective`]
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                         |
/// |-------------------------|---------------------------------|
/// | `.priority_weights(w)`  | High 0.6, Medium 1.0, Low 1.2   |
/// | `.pareto_weights(w)`    | time 0.5, cost 0.3, co2 0.2     |
///
/// # Example
///
/// ```rust,ignore
/// let planner = RouteBuilder::new(TransportMode::Car, Objective::Fastest).build()?;
/// let route = planner.run(&stops, depot);
/// ```
pub struct RouteBuilder {
    profile:          TransportProfile,
    objective:        Objective,
    priority_weights: Option<PriorityWeights>,
    pareto_weights:   Option<ParetoWeights>,
}

impl RouteBuilder {
    pub fn new(profile: impl Into<TransportProfile>, objective: Objective) -> Self {
        Self {
            profile: profile.into(),
            objective,
            priority_weights: None,
            pareto_weights:   None,
        }
    }

    /// Override the per-priority score multipliers.
    pub fn priority_weights(mut self, weights: PriorityWeights) -> Self {
        self.priority_weights = Some(weights);
        self
    }

    /// Override the term weights used by [`Objective::Pareto`].
    pub fn pareto_weights(mut self, weights: ParetoWeights) -> Self {
        self.pareto_weights = Some(weights);
        self
    }

    /// Validate inputs and return a ready-to-run [`RoutePlanner`].
    pub fn build(self) -> RouteResult<RoutePlanner> {
        // Profiles built with a struct literal skip `TransportProfile::new`.
        let profile = TransportProfile::new(
            self.profile.name,
            self.profile.speed_kmh,
            self.profile.cost_per_km,
            self.profile.co2_per_km,
        )?;

        let priority_weights = self.priority_weights.unwrap_or_default();
        priority_weights.validate()?;

        let pareto_weights = self.pareto_weights.unwrap_or_default();
        pareto_weights.validate()?;

        Ok(RoutePlanner {
            profile,
            objective: self.objective,
            priority_weights,
            pareto_weights,
        })
    }
}
