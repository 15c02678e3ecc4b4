//! Objects a connector can attach to, and the connection points on them.
//!
//! The router never owns diagram objects. It reads three things through the
//! [`Anchor`] trait: the bounding box (for the overlap penalty), a distance
//! estimate, and where a ray leaves the object's outline (for autogap).

use std::fmt;

use glam::DVec2;

use crate::direction::{Direction, DirectionSet};
use crate::types::{Point, Rect};

/// Maximum bisection steps in [`calculate_object_edge`].
const EDGE_MAX_ITER: usize = 25;
/// A sample point closer than this counts as inside the object.
const EDGE_INSIDE: f64 = 0.0000001;
/// A sample point within this distance counts as on the outline.
const EDGE_TOLERANCE: f64 = 0.001;

/// A diagram object seen from the router.
pub trait Anchor {
    /// Current bounds of the object.
    fn bounding_box(&self) -> Rect;

    /// Distance from `point` to the object; zero inside it.
    ///
    /// The default treats the object as its bounding box.
    fn distance_from(&self, point: Point) -> f64 {
        self.bounding_box().distance_to_point(point)
    }

    /// Where the segment from `from` toward `toward` crosses the outline.
    ///
    /// The default bisects using [`Anchor::distance_from`], which works for
    /// any silhouette. Shapes with a closed form should override it.
    fn object_edge(&self, from: Point, toward: Point) -> Point {
        calculate_object_edge(from, toward, |p| self.distance_from(p))
    }
}

/// Bisect the segment `from..toward` for the outline crossing of an object
/// whose distance function is `distance`.
///
/// If `toward` is already on or inside the object, `from` is returned.
pub fn calculate_object_edge(from: Point, toward: Point, distance: impl Fn(Point) -> f64) -> Point {
    let mut inside = from;
    let mut outside = toward;
    let mut mid = (from + toward) / 2.0;

    if distance(outside) < EDGE_TOLERANCE {
        return inside;
    }

    for _ in 0..EDGE_MAX_ITER {
        let dist = distance(mid);
        if dist < EDGE_INSIDE {
            inside = mid;
        } else {
            outside = mid;
        }
        mid = (inside + outside) / 2.0;
        if (EDGE_INSIDE..=EDGE_TOLERANCE).contains(&dist) {
            break;
        }
    }
    mid
}

/// Where a connector attaches to an object.
#[derive(Clone, Copy)]
pub struct ConnectionPoint<'a> {
    pub pos: Point,
    /// Directions a connector may leave this point in.
    pub directions: DirectionSet,
    /// Stop the connector at the object's outline instead of at `pos`.
    pub autogap: bool,
    pub object: &'a dyn Anchor,
}

impl<'a> ConnectionPoint<'a> {
    pub fn new(object: &'a dyn Anchor, pos: Point, directions: DirectionSet) -> Self {
        ConnectionPoint {
            pos,
            directions,
            autogap: false,
            object,
        }
    }

    pub fn with_autogap(mut self, autogap: bool) -> Self {
        self.autogap = autogap;
        self
    }
}

impl fmt::Debug for ConnectionPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPoint")
            .field("pos", &self.pos)
            .field("directions", &self.directions)
            .field("autogap", &self.autogap)
            .field("object", &self.object.bounding_box())
            .finish()
    }
}

/// A rectangular object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectAnchor {
    pub rect: Rect,
}

impl RectAnchor {
    pub fn new(rect: Rect) -> Self {
        RectAnchor { rect }
    }

    /// Connection point at the middle of the edge facing `dir`, open only in
    /// that direction.
    pub fn side_point(&self, dir: Direction) -> ConnectionPoint<'_> {
        let c = self.rect.center();
        let pos = match dir {
            Direction::North => DVec2::new(c.x, self.rect.top),
            Direction::East => DVec2::new(self.rect.right, c.y),
            Direction::South => DVec2::new(c.x, self.rect.bottom),
            Direction::West => DVec2::new(self.rect.left, c.y),
        };
        ConnectionPoint::new(self, pos, dir.into())
    }
}

impl Anchor for RectAnchor {
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    /// Clip the ray against the rectangle and return the exit point.
    fn object_edge(&self, from: Point, toward: Point) -> Point {
        let r = &self.rect;
        if r.contains_point(toward) {
            return from;
        }
        let d = toward - from;
        // Largest parameter t in [0, 1] that stays inside the rectangle.
        let mut t_exit: f64 = 1.0;
        if d.x > 0.0 {
            t_exit = t_exit.min((r.right - from.x) / d.x);
        } else if d.x < 0.0 {
            t_exit = t_exit.min((r.left - from.x) / d.x);
        }
        if d.y > 0.0 {
            t_exit = t_exit.min((r.bottom - from.y) / d.y);
        } else if d.y < 0.0 {
            t_exit = t_exit.min((r.top - from.y) / d.y);
        }
        if t_exit < 0.0 {
            // `from` is already outside
            return from;
        }
        from + d * t_exit
    }
}

/// An elliptical object inscribed in `rect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseAnchor {
    pub rect: Rect,
}

impl EllipseAnchor {
    pub fn new(rect: Rect) -> Self {
        EllipseAnchor { rect }
    }

    fn radii(&self) -> DVec2 {
        DVec2::new(self.rect.width() / 2.0, self.rect.height() / 2.0)
    }
}

impl Anchor for EllipseAnchor {
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    /// Radial distance to the outline; zero inside.
    fn distance_from(&self, point: Point) -> f64 {
        let radii = self.radii();
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return self.rect.distance_to_point(point);
        }
        let delta = point - self.rect.center();
        let denom = (delta.x * delta.x) / (radii.x * radii.x)
            + (delta.y * delta.y) / (radii.y * radii.y);
        if denom <= 1.0 {
            return 0.0;
        }
        delta.length() * (1.0 - 1.0 / denom.sqrt())
    }

    /// Solve the ray/ellipse quadratic for the far crossing in `[0, 1]`.
    fn object_edge(&self, from: Point, toward: Point) -> Point {
        let radii = self.radii();
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return from;
        }
        // Scale into the unit circle.
        let p = (from - self.rect.center()) / radii;
        let d = (toward - from) / radii;
        let a = d.length_squared();
        if a == 0.0 {
            return from;
        }
        let b = 2.0 * p.dot(d);
        let c = p.length_squared() - 1.0;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return from;
        }
        let t = (-b + disc.sqrt()) / (2.0 * a);
        if !(0.0..=1.0).contains(&t) {
            return from;
        }
        from + (toward - from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    /// Anchor that only supplies a bounding box, so the default bisection runs.
    struct BoxOnly(Rect);

    impl Anchor for BoxOnly {
        fn bounding_box(&self) -> Rect {
            self.0
        }
    }

    fn close(a: Point, b: Point, tol: f64) -> bool {
        a.abs_diff_eq(b, tol)
    }

    #[test]
    fn bisection_finds_box_edge() {
        let obj = BoxOnly(Rect::new(0.0, 0.0, 4.0, 2.0));
        let edge = obj.object_edge(dvec2(2.0, 1.0), dvec2(2.0, -3.0));
        assert!(close(edge, dvec2(2.0, 0.0), 0.002), "got {edge:?}");
    }

    #[test]
    fn bisection_returns_start_when_target_inside() {
        let obj = BoxOnly(Rect::new(0.0, 0.0, 4.0, 2.0));
        let from = dvec2(1.0, 1.0);
        assert_eq!(obj.object_edge(from, dvec2(3.0, 1.0)), from);
    }

    #[test]
    fn rect_edge_is_exact() {
        let obj = RectAnchor::new(Rect::new(0.0, 0.0, 4.0, 2.0));
        let rays = [
            (dvec2(2.0, 1.0), dvec2(2.0, -3.0), dvec2(2.0, 0.0)),
            (dvec2(1.0, 1.0), dvec2(7.0, 1.0), dvec2(4.0, 1.0)),
            (dvec2(1.0, 1.0), dvec2(-1.0, 1.0), dvec2(0.0, 1.0)),
        ];
        for (from, toward, edge) in rays {
            assert_eq!(obj.object_edge(from, toward), edge);
        }
    }

    #[test]
    fn ellipse_edge_lies_on_outline() {
        let obj = EllipseAnchor::new(Rect::new(-2.0, -1.0, 2.0, 1.0));
        let edge = obj.object_edge(dvec2(0.0, 0.0), dvec2(0.0, -2.0));
        assert!(close(edge, dvec2(0.0, -1.0), 1e-12), "got {edge:?}");
        let edge = obj.object_edge(dvec2(0.0, 0.0), dvec2(4.0, 0.0));
        assert!(close(edge, dvec2(2.0, 0.0), 1e-12), "got {edge:?}");
        assert_eq!(obj.distance_from(dvec2(0.5, 0.2)), 0.0);
        assert!((obj.distance_from(dvec2(0.0, -3.0)) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ellipse_default_bisection_agrees_with_closed_form() {
        let obj = EllipseAnchor::new(Rect::new(-2.0, -1.0, 2.0, 1.0));
        let from = dvec2(0.5, 0.0);
        let toward = dvec2(0.5, -3.0);
        let exact = obj.object_edge(from, toward);
        let bisected = calculate_object_edge(from, toward, |p| obj.distance_from(p));
        assert!(close(exact, bisected, 0.002), "{exact:?} vs {bisected:?}");
    }

    #[test]
    fn side_points_face_outward() {
        let obj = RectAnchor::new(Rect::new(0.0, 0.0, 4.0, 2.0));
        let cp = obj.side_point(Direction::East);
        assert_eq!(cp.pos, dvec2(4.0, 1.0));
        assert_eq!(cp.directions, DirectionSet::EAST);
        assert!(!cp.autogap);
        assert!(cp.with_autogap(true).autogap);
        assert_eq!(obj.side_point(Direction::North).pos, dvec2(2.0, 0.0));
    }
}
