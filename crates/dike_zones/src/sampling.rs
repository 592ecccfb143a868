//! Sample-count policies and coordinate grids along a single axis.
//!
//! Zones are sampled on evenly spaced 1-D grids. [`SampleCount`] decides how many points
//! a span gets; [`merge_coordinates`] splices additional positions into a grid without
//! producing near-duplicates.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Two coordinates closer than this (in metres) are treated as the same point.
pub const COORDINATE_TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of samples a single zone may resolve to.
pub const MAX_SAMPLES: usize = 1_000_000;

/// How many samples a zone span receives.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleCount {
    /// Exactly this many points, including both bounds.
    Fixed(usize),
    /// As few points as possible with spacing no larger than this.
    MaxSpacing(f64),
}

impl SampleCount {
    /// Resolves the number of points for the span `[min, max]`.
    pub fn resolve(&self, min: f64, max: f64) -> Result<usize> {
        let count = match *self {
            SampleCount::Fixed(n) => {
                if n < 2 {
                    return Err(Error::InvalidConfig(format!(
                        "sample count must be at least 2 to include both bounds, got {n}"
                    )));
                }
                n
            }
            SampleCount::MaxSpacing(d) => {
                if !d.is_finite() || d <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "maximum spacing must be finite and > 0, got {d}"
                    )));
                }
                let intervals = ((max - min) / d).ceil();
                if !intervals.is_finite() || intervals >= MAX_SAMPLES as f64 {
                    return Err(Error::InvalidConfig(format!(
                        "maximum spacing {d} over [{min}, {max}] exceeds {MAX_SAMPLES} samples"
                    )));
                }
                (intervals as usize).max(1) + 1
            }
        };

        if count > MAX_SAMPLES {
            return Err(Error::InvalidConfig(format!(
                "sample count {count} exceeds {MAX_SAMPLES}"
            )));
        }

        Ok(count)
    }
}

/// `n` evenly spaced values over `[min, max]`, both ends included exactly.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            let mut out = (0..n).map(|i| min + i as f64 * step).collect::<Vec<_>>();
            out[n - 1] = max;
            out
        }
    }
}

/// Sorted union of `base` and `extra` with near-duplicates removed.
///
/// Every distinct value of `base` is retained, however closely spaced. A value from
/// `extra` is only added when no retained point lies within [`COORDINATE_TOLERANCE`].
pub fn merge_coordinates(mut base: Vec<f64>, extra: impl IntoIterator<Item = f64>) -> Vec<f64> {
    base.sort_by(f64::total_cmp);
    base.dedup();

    for x in extra {
        let at = base.partition_point(|&p| p < x);
        let near_below = at > 0 && (x - base[at - 1]).abs() <= COORDINATE_TOLERANCE;
        let near_above = at < base.len() && (base[at] - x).abs() <= COORDINATE_TOLERANCE;
        if !near_below && !near_above {
            base.insert(at, x);
        }
    }

    base
}
