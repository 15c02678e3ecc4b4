//! Layout generators.
//!
//! Each generator works in the canonical frame (start at the origin, leaving
//! north) and produces exactly one candidate for its relative situation:
//!
//! - [`Parallel`]: the end also leaves north, so the connector runs up, across
//!   and back down into the end.
//! - [`Orthogonal`]: the end leaves east or west, one bend or a short jog.
//! - [`Opposite`]: the end leaves south and the connector has to come at it
//!   head on, either straight or around.
//!
//! All threshold comparisons are strict and must stay that way; boundary
//! cases decide which shape wins.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::direction::Direction;
use crate::types::Point;

use super::badness::{calculate_badness, length_badness};
use super::config::RouteConfig;
use super::defaults::STRAIGHT_EPSILON;

/// One candidate polyline in the canonical frame and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub points: Vec<Point>,
    pub badness: f64,
}

impl Candidate {
    fn scored(points: Vec<Point>, cfg: &RouteConfig) -> Self {
        let badness = calculate_badness(&points, cfg);
        Candidate { points, badness }
    }
}

/// A strategy that lays out a connector toward `to`.
#[enum_dispatch]
pub trait Layout {
    fn layout(&self, to: Point, cfg: &RouteConfig) -> Candidate;
}

/// The generator chosen for a relative end direction.
#[enum_dispatch(Layout)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGenerator {
    Parallel,
    Orthogonal,
    Opposite,
}

impl LayoutGenerator {
    /// Pick the generator for an end direction expressed in the canonical frame.
    pub fn for_relative(end_dir: Direction) -> Self {
        match end_dir {
            Direction::North => Parallel.into(),
            Direction::South => Opposite.into(),
            Direction::East | Direction::West => Orthogonal { end_dir }.into(),
        }
    }
}

/// Both ends leave in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parallel;

/// The end leaves at a right angle to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orthogonal {
    /// Relative end direction, east or west.
    pub end_dir: Direction,
}

/// The end leaves in the direction opposite to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Opposite;

#[inline]
fn sign_or_negative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { -1.0 }
}

impl Layout for Parallel {
    fn layout(&self, to: Point, cfg: &RouteConfig) -> Candidate {
        let md = cfg.min_dist;
        let points = if to.x.abs() > md {
            crate::log::trace!("parallel layout: wide");
            let top = (-md).min(to.y - md);
            vec![Point::ZERO, dvec2(0.0, top), dvec2(to.x, top), to]
        } else if to.y > 0.0 {
            // Close together, end below
            crate::log::trace!("parallel layout: narrow, end below");
            let top = -md;
            let off = to.x + md * sign_or_negative(to.x);
            let bottom = to.y - md;
            vec![
                Point::ZERO,
                dvec2(0.0, top),
                dvec2(off, top),
                dvec2(off, bottom),
                dvec2(to.x, bottom),
                to,
            ]
        } else {
            crate::log::trace!("parallel layout: narrow, end above");
            let top = to.y - md;
            let off = -md * sign_or_negative(to.x);
            let bottom = -md;
            vec![
                Point::ZERO,
                dvec2(0.0, bottom),
                dvec2(off, bottom),
                dvec2(off, top),
                dvec2(to.x, top),
                to,
            ]
        };
        Candidate::scored(points, cfg)
    }
}

impl Layout for Orthogonal {
    fn layout(&self, to: Point, cfg: &RouteConfig) -> Candidate {
        let md = cfg.min_dist;
        let dirmult = if self.end_dir == Direction::West { 1.0 } else { -1.0 };
        // Sideways clearance when the end is not comfortably on the far side.
        let off = if dirmult * to.x > 0.0 {
            -dirmult * md
        } else {
            -dirmult * (md + to.x.abs())
        };
        let jog = |x: f64| {
            vec![
                Point::ZERO,
                dvec2(0.0, -md),
                dvec2(x, -md),
                dvec2(x, to.y),
                to,
            ]
        };

        let points = if to.y < -md {
            if dirmult * to.x > md {
                crate::log::trace!("orthogonal layout: single bend");
                vec![Point::ZERO, dvec2(0.0, to.y), to]
            } else {
                crate::log::trace!("orthogonal layout: jog ahead");
                jog(off)
            }
        } else if dirmult * to.x > 2.0 * md {
            crate::log::trace!("orthogonal layout: jog at midpoint");
            jog(to.x / 2.0)
        } else {
            crate::log::trace!("orthogonal layout: jog behind");
            jog(off)
        };
        Candidate::scored(points, cfg)
    }
}

impl Layout for Opposite {
    fn layout(&self, to: Point, cfg: &RouteConfig) -> Candidate {
        let md = cfg.min_dist;
        let two_segments = 2.0 * cfg.extra_segment_badness;

        if to.y < -md {
            let mid = to.y / 2.0;
            let points = vec![Point::ZERO, dvec2(0.0, mid), dvec2(to.x, mid), to];
            // Scored directly: the crossbar is either absent or a free zig-zag.
            let badness = if to.x.abs() < STRAIGHT_EPSILON {
                crate::log::trace!("opposite layout: straight");
                length_badness(to.y.abs(), cfg) + two_segments
            } else {
                crate::log::trace!("opposite layout: zig-zag");
                2.0 * length_badness(mid.abs(), cfg) + two_segments
            };
            return Candidate { points, badness };
        }

        let x = if to.x.abs() > 2.0 * md {
            crate::log::trace!("opposite layout: doorhanger");
            to.x / 2.0
        } else {
            crate::log::trace!("opposite layout: overlap");
            -md * sign_or_negative(to.x)
        };
        let below = to.y + md;
        let points = vec![
            Point::ZERO,
            dvec2(0.0, -md),
            dvec2(x, -md),
            dvec2(x, below),
            dvec2(to.x, below),
            to,
        ];
        Candidate::scored(points, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::{East, North, South, West};

    fn cfg() -> RouteConfig {
        RouteConfig::default()
    }

    fn run(generator: LayoutGenerator, to: Point) -> Candidate {
        generator.layout(to, &cfg())
    }

    /// Every consecutive pair shares an x or a y coordinate.
    fn assert_axis_aligned(points: &[Point]) {
        for w in points.windows(2) {
            let aligned = w[0].x == w[1].x || w[0].y == w[1].y;
            assert!(aligned, "diagonal step {:?} -> {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn dispatch_by_relative_direction() {
        let parallel = LayoutGenerator::Parallel(Parallel);
        let opposite = LayoutGenerator::Opposite(Opposite);
        let east = LayoutGenerator::Orthogonal(Orthogonal { end_dir: East });
        assert_eq!(LayoutGenerator::for_relative(North), parallel);
        assert_eq!(LayoutGenerator::for_relative(South), opposite);
        assert_eq!(LayoutGenerator::for_relative(East), east);
    }

    #[test]
    fn parallel_wide() {
        let c = run(Parallel.into(), dvec2(5.0, 5.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(5.0, -1.0),
                dvec2(5.0, 5.0),
            ]
        );
        assert_eq!(c.badness, 39.0);

        // End far above: crossbar goes above the end
        let c = run(Parallel.into(), dvec2(-3.0, -4.0));
        assert_eq!(c.points[1], dvec2(0.0, -5.0));
        assert_eq!(c.points[2], dvec2(-3.0, -5.0));
    }

    #[test]
    fn parallel_narrow_end_below() {
        let c = run(Parallel.into(), dvec2(0.5, 4.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(1.5, -1.0),
                dvec2(1.5, 3.0),
                dvec2(0.5, 3.0),
                dvec2(0.5, 4.0),
            ]
        );
        assert_axis_aligned(&c.points);
    }

    #[test]
    fn parallel_narrow_end_above() {
        let c = run(Parallel.into(), dvec2(0.0, -3.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(1.0, -1.0),
                dvec2(1.0, -4.0),
                dvec2(0.0, -4.0),
                dvec2(0.0, -3.0),
            ]
        );
    }

    #[test]
    fn parallel_boundary_is_strict() {
        // |to.x| == MIN_DIST is not wide
        let narrow = run(Parallel.into(), dvec2(1.0, 2.0));
        assert_eq!(narrow.points.len(), 6);
        let wide = run(Parallel.into(), dvec2(1.0 + 1e-9, 2.0));
        assert_eq!(wide.points.len(), 4);
    }

    #[test]
    fn orthogonal_single_bend() {
        let west = Orthogonal { end_dir: West };
        let c = run(west.into(), dvec2(4.0, -3.0));
        assert_eq!(
            c.points,
            vec![dvec2(0.0, 0.0), dvec2(0.0, -3.0), dvec2(4.0, -3.0)]
        );
        // 2 segments + (2 + 3)
        assert_eq!(c.badness, 25.0);

        let east = Orthogonal { end_dir: East };
        let c = run(east.into(), dvec2(-4.0, -3.0));
        assert_eq!(c.points.len(), 3);
    }

    #[test]
    fn orthogonal_jog_when_end_is_on_wrong_side() {
        let west = Orthogonal { end_dir: West };
        let c = run(west.into(), dvec2(-2.0, -3.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(-3.0, -1.0),
                dvec2(-3.0, -3.0),
                dvec2(-2.0, -3.0),
            ]
        );
        assert_axis_aligned(&c.points);
    }

    #[test]
    fn orthogonal_jog_at_midpoint_when_end_behind() {
        let west = Orthogonal { end_dir: West };
        let c = run(west.into(), dvec2(6.0, 2.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(3.0, -1.0),
                dvec2(3.0, 2.0),
                dvec2(6.0, 2.0),
            ]
        );
    }

    #[test]
    fn orthogonal_jog_behind_close() {
        let east = Orthogonal { end_dir: East };
        // dirmult = -1, -to.x = -0.5 <= 0, off = 1 + 0.5
        let c = run(east.into(), dvec2(0.5, 2.0));
        assert_eq!(c.points[2], dvec2(1.5, -1.0));
        assert_eq!(c.points[3], dvec2(1.5, 2.0));
    }

    #[test]
    fn opposite_straight_uses_direct_score() {
        let c = run(Opposite.into(), dvec2(0.0, -6.0));
        assert_eq!(c.points.len(), 4);
        assert_eq!(c.points[1], dvec2(0.0, -3.0));
        assert_eq!(c.badness, 5.0 + 20.0);
    }

    #[test]
    fn opposite_zigzag_uses_direct_score() {
        let c = run(Opposite.into(), dvec2(3.0, -6.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -3.0),
                dvec2(3.0, -3.0),
                dvec2(3.0, -6.0),
            ]
        );
        assert_eq!(c.badness, 2.0 * 2.0 + 20.0);
    }

    #[test]
    fn opposite_doorhanger() {
        let c = run(Opposite.into(), dvec2(6.0, 2.0));
        assert_eq!(
            c.points,
            vec![
                dvec2(0.0, 0.0),
                dvec2(0.0, -1.0),
                dvec2(3.0, -1.0),
                dvec2(3.0, 3.0),
                dvec2(6.0, 3.0),
                dvec2(6.0, 2.0),
            ]
        );
        assert_eq!(c.badness, calculate_badness(&c.points, &cfg()));
    }

    #[test]
    fn opposite_overlap() {
        let c = run(Opposite.into(), dvec2(1.0, 0.0));
        assert_eq!(c.points[2], dvec2(-1.0, -1.0));
        assert_eq!(c.points[3], dvec2(-1.0, 1.0));
        assert_eq!(c.points[4], dvec2(1.0, 1.0));
        assert_axis_aligned(&c.points);
    }

    #[test]
    fn coincident_points_stay_finite() {
        for dir in Direction::ALL {
            let generator = LayoutGenerator::for_relative(dir);
            let c = run(generator, Point::ZERO);
            assert!(c.badness.is_finite(), "{generator:?}");
            assert_axis_aligned(&c.points);
            assert_eq!(c.points.first(), Some(&Point::ZERO));
            assert_eq!(c.points.last(), Some(&Point::ZERO));
        }
    }
}
