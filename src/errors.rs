//! Error types with diagnostic codes using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::direction::DirectionSet;
use crate::types::NumericError;

/// Errors reported by the router and the connector model.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// No direction pair produced a layout scoring below the badness ceiling.
    #[error("could not autoroute: no layout found for exits {start} -> {end}")]
    #[diagnostic(
        code(orthoroute::route::no_feasible_route),
        help("the connector keeps its points; check the open directions of both ends")
    )]
    NoFeasibleRoute {
        start: DirectionSet,
        end: DirectionSet,
    },

    #[error("{what} is not finite: {source}")]
    #[diagnostic(code(orthoroute::route::non_finite_input))]
    NonFiniteInput {
        what: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("an orthogonal connector needs at least 2 points, got {count}")]
    #[diagnostic(code(orthoroute::orthconn::too_few_points))]
    TooFewPoints { count: usize },
}

/// Errors from building a [`RouteConfig`](crate::route::RouteConfig).
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
#[error("invalid {field}: {source}")]
#[diagnostic(code(orthoroute::config::invalid_value))]
pub struct ConfigError {
    pub field: &'static str,
    #[source]
    pub source: NumericError,
}
