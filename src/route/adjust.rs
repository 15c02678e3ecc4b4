//! Endpoint adjustments applied before layout: autogap and arrow reservation.

use crate::anchor::ConnectionPoint;
use crate::direction::Direction;
use crate::types::Point;

/// Move `pos` out to the attached object's outline when the connection point
/// asks for an automatic gap.
///
/// The target point is `pos` mirrored through the bounding-box edge facing
/// `dir`, which is guaranteed to lie outside the box; the object then reports
/// where the segment toward it leaves its outline.
pub fn adjust_for_gap(pos: Point, dir: Direction, cp: Option<&ConnectionPoint<'_>>) -> Point {
    let Some(cp) = cp.filter(|cp| cp.autogap) else {
        return pos;
    };
    let bb = cp.object.bounding_box();
    let mut other = pos;
    match dir {
        Direction::North => other.y += 2.0 * (bb.top - pos.y),
        Direction::South => other.y += 2.0 * (bb.bottom - pos.y),
        Direction::East => other.x += 2.0 * (bb.right - pos.x),
        Direction::West => other.x += 2.0 * (bb.left - pos.x),
    }
    cp.object.object_edge(pos, other)
}

/// Shift `pos` by `distance` along `dir`, reserving room for an arrowhead.
/// A negative distance undoes an earlier shift.
pub fn adjust_for_arrow(pos: &mut Point, dir: Direction, distance: f64) {
    match dir {
        Direction::North => pos.y -= distance,
        Direction::East => pos.x += distance,
        Direction::South => pos.y += distance,
        Direction::West => pos.x -= distance,
    }
}
