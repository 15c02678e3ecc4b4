//! Router tuning.

use crate::errors::ConfigError;
use crate::types::{NumericError, check_finite, check_positive};

use super::defaults;

/// Tunable constants of the cost model and the layout generators.
///
/// `Default` reproduces the classic router exactly; the `with_*` setters
/// validate their input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    /// Ideal minimum segment length; also the clearance used by the layouts.
    pub min_dist: f64,
    /// Penalty for a zero-length segment.
    pub max_small_badness: f64,
    /// Penalty per segment.
    pub extra_segment_badness: f64,
    /// Routes scoring at or above this are rejected.
    pub max_badness: f64,
    /// Required margin for a candidate to replace the current best.
    pub improvement_epsilon: f64,
    /// Quarter the short-segment penalty for interior zig-zag steps.
    pub relax_interior_kinks: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            min_dist: defaults::MIN_DIST,
            max_small_badness: defaults::MAX_SMALL_BADNESS,
            extra_segment_badness: defaults::EXTRA_SEGMENT_BADNESS,
            max_badness: defaults::MAX_BADNESS,
            improvement_epsilon: defaults::IMPROVEMENT_EPSILON,
            relax_interior_kinks: false,
        }
    }
}

fn positive(value: f64, field: &'static str) -> Result<f64, ConfigError> {
    let invalid = |source| ConfigError { field, source };
    check_positive(value).map_err(invalid)
}

impl RouteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_dist(mut self, min_dist: f64) -> Result<Self, ConfigError> {
        self.min_dist = positive(min_dist, "min_dist")?;
        Ok(self)
    }

    pub fn with_max_small_badness(mut self, value: f64) -> Result<Self, ConfigError> {
        self.max_small_badness = positive(value, "max_small_badness")?;
        Ok(self)
    }

    /// Zero is allowed here and turns off the per-segment charge.
    pub fn with_extra_segment_badness(mut self, value: f64) -> Result<Self, ConfigError> {
        let field = "extra_segment_badness";
        let invalid = |source| ConfigError { field, source };
        let value = check_finite(value).map_err(invalid)?;
        if value < 0.0 {
            return Err(invalid(NumericError::Negative));
        }
        self.extra_segment_badness = value;
        Ok(self)
    }

    pub fn with_max_badness(mut self, value: f64) -> Result<Self, ConfigError> {
        self.max_badness = positive(value, "max_badness")?;
        Ok(self)
    }

    pub fn with_improvement_epsilon(mut self, value: f64) -> Result<Self, ConfigError> {
        self.improvement_epsilon = positive(value, "improvement_epsilon")?;
        Ok(self)
    }

    pub fn with_relaxed_kinks(mut self, relax: bool) -> Self {
        self.relax_interior_kinks = relax;
        self
    }
}
