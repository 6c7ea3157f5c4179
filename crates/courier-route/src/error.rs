use courier_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route configuration error: {0}")]
    Config(String),

    #[error("unknown objective {0:?} (expected fastest, lowest_cost, lowest_co2 or pareto)")]
    UnknownObjective(String),

    #[error("invalid route input: {0}")]
    Core(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
