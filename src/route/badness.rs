//! Cost model for candidate layouts. Lower is better.

use crate::types::{Point, manhattan_distance};

use super::config::RouteConfig;

/// Penalty for one segment of length `len`.
///
/// Zero at `min_dist`, rising smoothly to `max_small_badness` as the segment
/// shrinks to nothing, and growing linearly beyond `min_dist`.
pub fn length_badness(len: f64, cfg: &RouteConfig) -> f64 {
    if len < cfg.min_dist {
        2.0 * cfg.max_small_badness / (1.0 + len / cfg.min_dist) - cfg.max_small_badness
    } else {
        len - cfg.min_dist
    }
}

/// Score a polyline: a fixed charge per segment plus each segment's length
/// penalty (Manhattan length).
pub fn calculate_badness(points: &[Point], cfg: &RouteConfig) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len();
    let mut badness = (n - 1) as f64 * cfg.extra_segment_badness;
    for i in 0..n - 1 {
        let len = manhattan_distance(points[i], points[i + 1]);
        let mut this_badness = length_badness(len, cfg);
        if cfg.relax_interior_kinks && len < cfg.min_dist && is_interior_kink(points, i) {
            this_badness /= 4.0;
        }
        badness += this_badness;
    }
    badness
}

/// Segment `i` is interior and its neighbours keep going the same way, so it
/// is a step in a zig-zag rather than the bottom of a U-turn.
fn is_interior_kink(ps: &[Point], i: usize) -> bool {
    if i == 0 || i + 2 >= ps.len() {
        return false;
    }
    if (ps[i].x - ps[i + 1].x).abs() > 0.0000001 {
        // horizontal step between vertical neighbours
        (ps[i].y - ps[i - 1].y) * (ps[i + 1].y - ps[i + 2].y) < 0.0
    } else {
        (ps[i].x - ps[i - 1].x) * (ps[i + 1].x - ps[i + 2].x) < 0.0
    }
}
