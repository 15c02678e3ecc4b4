//! Default tuning constants for the router (all in diagram units).

/// Badness at or above this means no usable layout was found.
pub const MAX_BADNESS: f64 = 10000.0;
/// Segments shorter than this are penalized.
pub const MIN_DIST: f64 = 1.0;
/// Penalty for a segment of zero length.
pub const MAX_SMALL_BADNESS: f64 = 10.0;
/// Penalty for each segment in a layout.
pub const EXTRA_SEGMENT_BADNESS: f64 = 10.0;
/// A candidate must beat the current best by more than this.
pub const IMPROVEMENT_EPSILON: f64 = 0.00001;
/// `|to.x|` below this makes the opposite layout a straight line.
pub const STRAIGHT_EPSILON: f64 = 0.00000001;
