//! Geometry primitives shared by the router: points, rectangles, orientations.
//!
//! Coordinates use the screen convention: x grows to the east, y grows to the
//! south, so "north" is −y.

use std::fmt;

use glam::DVec2;

/// A point in diagram coordinates.
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite values.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinite, zero and negative values.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Sum of the absolute coordinate differences.
#[inline]
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Axis-aligned rectangle, `top <= bottom` and `left <= right`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Smallest rectangle containing both points, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Rect {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Overlap test. Rectangles that merely touch count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.top > other.bottom
            || self.bottom < other.top)
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Point) -> bool {
        !(p.x < self.left || p.x > self.right || p.y > self.bottom || p.y < self.top)
    }

    /// Manhattan distance from the rectangle to `p`; zero inside.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let dx = if p.x < self.left {
            self.left - p.x
        } else if p.x > self.right {
            p.x - self.right
        } else {
            0.0
        };
        let dy = if p.y < self.top {
            self.top - p.y
        } else if p.y > self.bottom {
            p.y - self.bottom
        } else {
            0.0
        };
        dx + dy
    }
}

/// Orientation of one segment of an orthogonal polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Orientation array for a polyline: the first segment is horizontal when its
/// endpoints share a y coordinate (within 1e-5), then segments alternate.
pub fn orientations(points: &[Point]) -> Vec<Orientation> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut current = if (points[0].y - points[1].y).abs() < 0.00001 {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let mut out = Vec::with_capacity(points.len() - 1);
    for _ in 0..points.len() - 1 {
        out.push(current);
        current = current.flipped();
    }
    out
}
