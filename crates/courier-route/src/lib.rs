//! `courier-route`: greedy single-vehicle route construction.
//!
//! # Selection loop
//!
//! ```text
//! position = depot
//! while unvisited is not empty:
//!   ① Score    every unvisited stop against `position` for the objective.
//!   ② Select   strictly smallest score; the earliest stop wins ties.
//!   ③ Record   RouteLeg + MetricRecord, fold the hop into the totals.
//!   ④ Move     position = stop; remove it from unvisited.
//! append RETURN_TO_DEPOT leg and fold it into the totals
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `RoutePlanner::run_many` plans depots on Rayon's pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use courier_core::{Depot, TransportMode};
//! use courier_route::{Objective, RouteBuilder};
//!
//! let planner = RouteBuilder::new(TransportMode::Car, Objective::Fastest).build()?;
//! let route = planner.run(&stops, Depot::new(59.90, 10.70));
//! println!("{}", route.totals);
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod objective;
pub mod observer;
pub mod planner;
pub mod route;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use builder::RouteBuilder;
pub use error::{RouteError, RouteResult};
pub use metrics::{MetricRecord, MetricsRecorder};
pub use objective::{Objective, ParetoWeights, PriorityWeights};
pub use observer::{NoopObserver, RouteObserver};
pub use planner::{RoutePlanner, RouteRun, RunPhase};
pub use route::{PlannedRoute, RETURN_TO_DEPOT, RouteLeg, Totals};
pub use scoring::{LegCost, ScoredCandidate, ScoringContext};
