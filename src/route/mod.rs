//! Direction search: try every open pair of exit directions and keep the best
//! layout.
//!
//! For each `(start_dir, end_dir)` pair allowed by both endpoints the driver
//!
//! 1. pushes each endpoint out to its object's outline (autogap) and then
//!    forward by the arrowhead reservation,
//! 2. rotates the problem into the canonical frame,
//! 3. asks the matching [`LayoutGenerator`] for a candidate,
//! 4. rotates the candidate back and counts how often its interior segments
//!    run over either attached object,
//! 5. keeps it if it overlaps no more than the best so far and scores
//!    strictly better.
//!
//! Pairs are tried start-major in north, east, south, west order, so on equal
//! badness the earliest pair wins.

use std::fmt;

use crate::anchor::ConnectionPoint;
use crate::direction::{Direction, DirectionSet};
use crate::errors::RouteError;
use crate::types::{Orientation, Point, Rect, check_finite, orientations};

pub mod adjust;
pub mod badness;
pub mod config;
pub mod defaults;
pub mod layout;
pub mod normalize;

pub use adjust::{adjust_for_arrow, adjust_for_gap};
pub use badness::{calculate_badness, length_badness};
pub use config::RouteConfig;
pub use layout::{Candidate, Layout, LayoutGenerator, Opposite, Orthogonal, Parallel};
pub use normalize::{normalize, unnormalize};

/// Arrowhead reservations at either end of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExtraSpacing {
    pub start_trans: f64,
    pub end_trans: f64,
}

impl ExtraSpacing {
    pub fn new(start_trans: f64, end_trans: f64) -> Self {
        ExtraSpacing {
            start_trans,
            end_trans,
        }
    }
}

/// One end of the connector as the router sees it.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub position: Point,
    pub directions: DirectionSet,
    pub connection: Option<&'a ConnectionPoint<'a>>,
}

impl<'a> Endpoint<'a> {
    /// An end that is not attached to anything and may leave in any direction.
    pub fn free(position: Point) -> Self {
        Endpoint {
            position,
            directions: DirectionSet::ALL,
            connection: None,
        }
    }

    /// An end attached to a connection point.
    pub fn connected(cp: &'a ConnectionPoint<'a>) -> Self {
        Endpoint {
            position: cp.pos,
            directions: cp.directions,
            connection: Some(cp),
        }
    }

    /// Use the connection point when there is one, otherwise the connector's
    /// current end position.
    pub fn resolve(cp: Option<&'a ConnectionPoint<'a>>, current: Point) -> Self {
        match cp {
            Some(cp) => Self::connected(cp),
            None => Self::free(current),
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.connection.map(|cp| cp.object.bounding_box())
    }
}

/// Everything the driver needs for one routing call.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub start: Endpoint<'a>,
    pub end: Endpoint<'a>,
    pub spacing: ExtraSpacing,
}

impl<'a> RouteRequest<'a> {
    pub fn new(start: Endpoint<'a>, end: Endpoint<'a>) -> Self {
        RouteRequest {
            start,
            end,
            spacing: ExtraSpacing::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: ExtraSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    fn validate(&self) -> Result<(), RouteError> {
        let checks = [
            ("start x", self.start.position.x),
            ("start y", self.start.position.y),
            ("end x", self.end.position.x),
            ("end y", self.end.position.y),
            ("start arrow spacing", self.spacing.start_trans),
            ("end arrow spacing", self.spacing.end_trans),
        ];
        for (what, value) in checks {
            check_finite(value)
                .map_err(|source| RouteError::NonFiniteInput { what, source })?;
        }
        Ok(())
    }
}

/// The chosen route in diagram coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub points: Vec<Point>,
    pub badness: f64,
    /// Interior segments overlapping the attached objects.
    pub intersections: usize,
    pub start_dir: Direction,
    pub end_dir: Direction,
}

impl Route {
    /// Segment orientations, as an orthogonal connector stores them.
    pub fn orientations(&self) -> Vec<Orientation> {
        orientations(&self.points)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            // `+ 0.0` folds negative zero so output is stable
            write!(f, "({}, {})", p.x + 0.0, p.y + 0.0)?;
        }
        Ok(())
    }
}

/// Count interior segments (all but the first and last) whose extent
/// overlaps either box.
pub fn count_intersections(
    points: &[Point],
    start_box: Option<&Rect>,
    end_box: Option<&Rect>,
) -> usize {
    if points.len() < 4 {
        return 0;
    }
    let mut n = 0;
    for i in 1..points.len() - 2 {
        let seg = Rect::from_corners(points[i], points[i + 1]);
        n += start_box.is_some_and(|r| r.intersects(&seg)) as usize;
        n += end_box.is_some_and(|r| r.intersects(&seg)) as usize;
    }
    n
}

/// Lay out one direction pair and bring the candidate back to diagram
/// coordinates, with both ends still shifted for arrowheads.
fn route_pair(
    request: &RouteRequest<'_>,
    start_dir: Direction,
    end_dir: Direction,
    cfg: &RouteConfig,
) -> (Vec<Point>, f64) {
    let mut start = adjust_for_gap(request.start.position, start_dir, request.start.connection);
    adjust_for_arrow(&mut start, start_dir, request.spacing.start_trans);
    let mut end = adjust_for_gap(request.end.position, end_dir, request.end.connection);
    adjust_for_arrow(&mut end, end_dir, request.spacing.end_trans);

    let (relative_end_dir, to) = normalize(start_dir, end_dir, start, end);
    let generator = LayoutGenerator::for_relative(relative_end_dir);
    let candidate = generator.layout(to, cfg);
    (unnormalize(start_dir, start, &candidate.points), candidate.badness)
}

/// Whether a candidate beats the best so far: no more overlaps and a badness
/// lower by more than `improvement_epsilon`. A NaN badness never qualifies.
fn is_improvement(
    badness: f64,
    intersections: usize,
    best_badness: f64,
    best_intersections: usize,
    cfg: &RouteConfig,
) -> bool {
    intersections <= best_intersections && badness - best_badness < -cfg.improvement_epsilon
}

/// Compute the best orthogonal route for `request`.
///
/// Fails with [`RouteError::NoFeasibleRoute`] when no open direction pair
/// scores below `cfg.max_badness`.
pub fn route(request: &RouteRequest<'_>, cfg: &RouteConfig) -> Result<Route, RouteError> {
    request.validate()?;

    let start_box = request.start.bounding_box();
    let end_box = request.end.bounding_box();

    let mut best: Option<Route> = None;
    let mut min_badness = cfg.max_badness;
    let mut best_intersections = usize::MAX;

    for start_dir in request.start.directions.iter() {
        for end_dir in request.end.directions.iter() {
            let (mut points, badness) = route_pair(request, start_dir, end_dir, cfg);
            let intersections = count_intersections(&points, start_box.as_ref(), end_box.as_ref());

            if !is_improvement(badness, intersections, min_badness, best_intersections, cfg) {
                crate::log::trace!(
                    %start_dir, %end_dir, badness, intersections,
                    "candidate rejected"
                );
                continue;
            }

            crate::log::debug!(
                %start_dir, %end_dir, badness, intersections, best = min_badness,
                "candidate accepted"
            );
            min_badness = badness;
            best_intersections = intersections;

            let last = points.len() - 1;
            adjust_for_arrow(&mut points[0], start_dir, -request.spacing.start_trans);
            adjust_for_arrow(&mut points[last], end_dir, -request.spacing.end_trans);

            best = Some(Route {
                points,
                badness,
                intersections,
                start_dir,
                end_dir,
            });
        }
    }

    match best {
        Some(route) if min_badness < cfg.max_badness => Ok(route),
        _ => Err(RouteError::NoFeasibleRoute {
            start: request.start.directions,
            end: request.end.directions,
        }),
    }
}
