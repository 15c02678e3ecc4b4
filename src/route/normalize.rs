//! Moving a routing problem into the canonical frame and back.
//!
//! In the canonical frame the start point sits at the origin and leaves
//! north (−y). Rotating the whole problem there means the layout generators
//! only have to handle three relative situations instead of sixteen.

use glam::dvec2;

use crate::direction::Direction;
use crate::types::Point;

#[inline]
fn rotate_cw(p: Point) -> Point {
    dvec2(-p.y, p.x)
}

#[inline]
fn rotate_ccw(p: Point) -> Point {
    dvec2(p.y, -p.x)
}

#[inline]
fn rotate_180(p: Point) -> Point {
    dvec2(-p.x, -p.y)
}

/// Translate `start` to the origin and rotate so `start_dir` becomes north.
///
/// Returns the end direction as seen in the canonical frame together with the
/// end point in that frame.
pub fn normalize(
    start_dir: Direction,
    end_dir: Direction,
    start: Point,
    end: Point,
) -> (Direction, Point) {
    let rel = end - start;
    match start_dir {
        Direction::North => (end_dir, rel),
        Direction::East => (end_dir.next_counter_clockwise(), rotate_ccw(rel)),
        Direction::West => (end_dir.next_clockwise(), rotate_cw(rel)),
        Direction::South => (end_dir.opposite(), rotate_180(rel)),
    }
}

/// Undo [`normalize`] on every point of a canonical-frame layout.
pub fn unnormalize(start_dir: Direction, start: Point, points: &[Point]) -> Vec<Point> {
    let rotate: fn(Point) -> Point = match start_dir {
        Direction::North => |p| p,
        Direction::East => rotate_cw,
        Direction::West => rotate_ccw,
        Direction::South => rotate_180,
    };
    points.iter().map(|&p| rotate(p) + start).collect()
}
