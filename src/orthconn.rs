//! Orthogonal connectors and the autoroute entry point.

use crate::anchor::ConnectionPoint;
use crate::errors::RouteError;
use crate::route::{Endpoint, ExtraSpacing, RouteConfig, RouteRequest, route};
use crate::types::{Orientation, Point, check_finite, orientations};

/// What the router needs from a connector it routes.
pub trait OrthConnector {
    /// Current first and last point.
    fn endpoints(&self) -> (Point, Point);

    /// Arrowhead reservations at the start and end.
    fn extra_spacing(&self) -> ExtraSpacing {
        ExtraSpacing::default()
    }

    /// Replace the connector's polyline.
    fn set_points(&mut self, points: Vec<Point>);
}

/// Route `conn` between its ends with the default configuration.
///
/// See [`autoroute_with`].
pub fn autoroute<C>(
    conn: &mut C,
    start: Option<&ConnectionPoint<'_>>,
    end: Option<&ConnectionPoint<'_>>,
) -> bool
where
    C: OrthConnector + ?Sized,
{
    autoroute_with(conn, start, end, &RouteConfig::default())
}

/// Route `conn` between `start` and `end` and install the result.
///
/// An end without a connection point stays where the connector currently has
/// it and may be left in any direction. Returns `false` and leaves `conn`
/// untouched when no route is found.
pub fn autoroute_with<C>(
    conn: &mut C,
    start: Option<&ConnectionPoint<'_>>,
    end: Option<&ConnectionPoint<'_>>,
    cfg: &RouteConfig,
) -> bool
where
    C: OrthConnector + ?Sized,
{
    let (from, to) = conn.endpoints();
    let request = RouteRequest::new(Endpoint::resolve(start, from), Endpoint::resolve(end, to))
        .with_spacing(conn.extra_spacing());

    match route(&request, cfg) {
        Ok(found) => {
            crate::log::debug!(
                badness = found.badness,
                points = found.points.len(),
                "autorouted"
            );
            conn.set_points(found.into_points());
            true
        }
        Err(_err) => {
            crate::log::debug!(%_err, "autoroute failed");
            false
        }
    }
}

/// A polyline connector whose segments alternate between horizontal and
/// vertical.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthConn {
    points: Vec<Point>,
    orientation: Vec<Orientation>,
    pub extra_spacing: ExtraSpacing,
    autorouting: bool,
}

impl OrthConn {
    pub fn new(points: Vec<Point>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints {
                count: points.len(),
            });
        }
        for p in &points {
            for (what, v) in [("connector point x", p.x), ("connector point y", p.y)] {
                check_finite(v)
                    .map_err(|source| RouteError::NonFiniteInput { what, source })?;
            }
        }
        let orientation = orientations(&points);
        Ok(OrthConn {
            points,
            orientation,
            extra_spacing: ExtraSpacing::default(),
            autorouting: false,
        })
    }

    pub fn with_extra_spacing(mut self, spacing: ExtraSpacing) -> Self {
        self.extra_spacing = spacing;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// One entry per segment.
    pub fn orientation(&self) -> &[Orientation] {
        &self.orientation
    }

    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    pub fn is_autorouting(&self) -> bool {
        self.autorouting
    }

    /// Turn autorouting on or off. Turning it on routes immediately; the
    /// return value says whether a new route was installed.
    pub fn set_autorouting(
        &mut self,
        on: bool,
        start: Option<&ConnectionPoint<'_>>,
        end: Option<&ConnectionPoint<'_>>,
    ) -> bool {
        self.autorouting = on;
        on && autoroute(self, start, end)
    }
}

impl OrthConnector for OrthConn {
    fn endpoints(&self) -> (Point, Point) {
        // `new` guarantees at least two points
        (self.points[0], self.points[self.points.len() - 1])
    }

    fn extra_spacing(&self) -> ExtraSpacing {
        self.extra_spacing
    }

    fn set_points(&mut self, points: Vec<Point>) {
        self.orientation = orientations(&points);
        self.points = points;
    }
}
