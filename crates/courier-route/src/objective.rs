//! Optimisation objectives and the tunable weight tables they read.

use std::str::FromStr;

use tracing::warn;

use courier_core::Priority;

use crate::{RouteError, RouteResult};

/// What the greedy loop minimises at each step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Objective {
    /// Travel time, biased by priority.
    #[default]
    Fastest,
    /// Monetary cost with a heavy-parcel penalty, biased by priority.
    LowestCost,
    /// Emissions, with a damped priority adjustment.
    LowestCo2,
    /// Weighted sum of time, cost and emissions, biased by priority.
    Pareto,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::Fastest,
        Objective::LowestCost,
        Objective::LowestCo2,
        Objective::Pareto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Fastest    => "fastest",
            Objective::LowestCost => "lowest_cost",
            Objective::LowestCo2  => "lowest_co2",
            Objective::Pareto     => "pareto",
        }
    }

    /// Lenient lookup: any unrecognised name degrades to [`Objective::Fastest`].
    ///
    /// Use `str::parse` instead when the caller wants to reject bad input.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(objective = name, "unknown objective, falling back to fastest");
            Objective::Fastest
        })
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = RouteError;

    fn from_str(s: &str) -> RouteResult<Self> {
        match s {
            "fastest"     => Ok(Objective::Fastest),
            "lowest_cost" => Ok(Objective::LowestCost),
            "lowest_co2"  => Ok(Objective::LowestCo2),
            "pareto"      => Ok(Objective::Pareto),
            other => Err(RouteError::UnknownObjective(other.to_owned())),
        }
    }
}

// ── Weight tables ─────────────────────────────────────────────────────────────

/// Score multiplier per priority tier.  Lower means "more important": a
/// smaller factor shrinks the score and pulls the stop earlier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PriorityWeights {
    pub high:   f64,
    pub medium: f64,
    pub low:    f64,
}

impl PriorityWeights {
    #[inline]
    pub fn factor(&self, priority: Priority) -> f64 {
        match priority {
            Priority::High   => self.high,
            Priority::Medium => self.medium,
            Priority::Low    => self.low,
        }
    }

    pub(crate) fn validate(&self) -> RouteResult<()> {
        check_weights("priority", &[("high", self.high), ("medium", self.medium), ("low", self.low)])
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self { high: 0.6, medium: 1.0, low: 1.2 }
    }
}

/// Term weights of the [`Objective::Pareto`] sum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParetoWeights {
    pub time: f64,
    pub cost: f64,
    pub co2:  f64,
}

impl ParetoWeights {
    pub(crate) fn validate(&self) -> RouteResult<()> {
        check_weights("pareto", &[("time", self.time), ("cost", self.cost), ("co2", self.co2)])
    }
}

impl Default for ParetoWeights {
    fn default() -> Self {
        Self { time: 0.5, cost: 0.3, co2: 0.2 }
    }
}

fn check_weights(table: &str, entries: &[(&str, f64)]) -> RouteResult<()> {
    for &(key, value) in entries {
        if !value.is_finite() || value < 0.0 {
            return Err(RouteError::Config(format!(
                "{table} weight {key:?} must be finite and >= 0, got {value}"
            )));
        }
    }
    Ok(())
}
