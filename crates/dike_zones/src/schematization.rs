//! Dike schematization interface and per-side slope profiles.
//!
//! [`DikeSchematization`] is the cross-sectional profile handed in by the caller. It is
//! only read here. [`SlopeProfile`] is the part of that profile on one side of the outer
//! crest, which is where vertical zones are projected onto horizontal positions.
use std::fmt;

use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, GeometryError, Result};

/// Side of the dike crest a vertical zone is projected onto.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlopeSide {
    /// Seaward side, vertices with `x <= outer_crest`.
    #[default]
    Outer,
    /// Landward side, vertices with `x >= outer_crest`.
    Inner,
}

impl SlopeSide {
    /// Whether a vertex at `x` belongs to this side of a crest at `crest`.
    #[inline]
    pub fn contains(self, x: f64, crest: f64) -> bool {
        match self {
            SlopeSide::Outer => x <= crest,
            SlopeSide::Inner => x >= crest,
        }
    }
}

impl fmt::Display for SlopeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlopeSide::Outer => f.write_str("outer"),
            SlopeSide::Inner => f.write_str("inner"),
        }
    }
}

/// Piecewise-linear cross-section of a dike.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DikeSchematization {
    /// Horizontal vertex positions, in traversal order.
    pub x_positions: Vec<f64>,
    /// Vertical vertex positions, parallel to `x_positions`.
    pub z_positions: Vec<f64>,
    /// Roughness per vertex.
    pub roughnesses: Vec<f64>,
    /// Horizontal position of the outer toe.
    pub outer_toe: f64,
    /// Horizontal position of the outer crest.
    pub outer_crest: f64,
}

impl DikeSchematization {
    /// Creates a validated schematization from parallel coordinate lists.
    pub fn new(
        x_positions: Vec<f64>,
        z_positions: Vec<f64>,
        roughnesses: Vec<f64>,
        outer_toe: f64,
        outer_crest: f64,
    ) -> Result<Self> {
        let schematization = Self {
            x_positions,
            z_positions,
            roughnesses,
            outer_toe,
            outer_crest,
        };
        schematization.validate()?;
        Ok(schematization)
    }

    /// Creates a validated schematization from (x, z) vertex pairs.
    pub fn from_vertices<I, V>(
        vertices: I,
        roughnesses: Vec<f64>,
        outer_toe: f64,
        outer_crest: f64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Vector2<f64>>,
    {
        let (x_positions, z_positions) = vertices
            .into_iter()
            .map(|v| {
                let v: Vector2<f64> = v.into();
                (v.x, v.y)
            })
            .unzip();
        Self::new(x_positions, z_positions, roughnesses, outer_toe, outer_crest)
    }

    /// Checks the structural invariants of the profile.
    ///
    /// Monotonicity is a per-side property and is checked by [`SlopeProfile`].
    pub fn validate(&self) -> Result<()> {
        if self.x_positions.is_empty() {
            return Err(Error::InvalidSchematization(
                "profile must contain at least one vertex".into(),
            ));
        }
        if self.x_positions.len() != self.z_positions.len() {
            return Err(Error::InvalidSchematization(format!(
                "{} x positions but {} z positions",
                self.x_positions.len(),
                self.z_positions.len()
            )));
        }
        if self.roughnesses.len() != self.x_positions.len() {
            return Err(Error::InvalidSchematization(format!(
                "{} roughnesses for {} vertices",
                self.roughnesses.len(),
                self.x_positions.len()
            )));
        }
        if let Some(index) = self
            .vertices()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(Error::InvalidSchematization(format!(
                "vertex {index} is not finite"
            )));
        }
        if !self.outer_crest.is_finite() || !self.outer_toe.is_finite() {
            return Err(Error::InvalidSchematization(
                "outer toe and outer crest must be finite".into(),
            ));
        }

        Ok(())
    }

    /// Number of profile vertices.
    pub fn len(&self) -> usize {
        self.x_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_positions.is_empty()
    }

    /// Iterates the profile vertices as (x, z) pairs.
    pub fn vertices(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.x_positions
            .iter()
            .zip(&self.z_positions)
            .map(|(&x, &z)| DVec2::new(x, z))
    }

    /// The part of the profile on one side of the outer crest.
    pub fn slope(&self, side: SlopeSide) -> std::result::Result<SlopeProfile, GeometryError> {
        let vertices = self
            .vertices()
            .filter(|v| side.contains(v.x, self.outer_crest))
            .collect::<Vec<_>>();

        if vertices.is_empty() {
            return Err(GeometryError::EmptySlope {
                side,
                crest: self.outer_crest,
            });
        }

        SlopeProfile::new(side, vertices)
    }
}

/// Vertices of one dike slope, ordered from toe to crest for interpolation.
///
/// Elevations must be monotonic along the slope. Ascending order is stored so that
/// walking the vertices means walking uphill; plateaus are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct SlopeProfile {
    side: SlopeSide,
    /// Vertices in the original traversal order.
    vertices: Vec<DVec2>,
    /// Same vertices, ordered uphill.
    uphill: Vec<DVec2>,
}

impl SlopeProfile {
    fn new(side: SlopeSide, vertices: Vec<DVec2>) -> std::result::Result<Self, GeometryError> {
        let n = vertices.len();
        let ascending = match (vertices.first(), vertices.last()) {
            (Some(first), Some(last)) if n > 1 && last.y > first.y => true,
            (Some(first), Some(last)) if n > 1 && last.y < first.y => false,
            _ if n == 1 => true,
            _ => return Err(GeometryError::NonMonotonicSlope { side, index: 0 }),
        };

        if let Some(index) = vertices.windows(2).position(|w| {
            if ascending {
                w[1].y < w[0].y
            } else {
                w[1].y > w[0].y
            }
        }) {
            return Err(GeometryError::NonMonotonicSlope {
                side,
                index: index + 1,
            });
        }

        let mut uphill = vertices.clone();
        if !ascending {
            uphill.reverse();
        }

        Ok(Self {
            side,
            vertices,
            uphill,
        })
    }

    pub fn side(&self) -> SlopeSide {
        self.side
    }

    /// Vertices of this slope in schematization order.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Lowest and highest elevation on this slope.
    pub fn elevation_range(&self) -> (f64, f64) {
        let lowest = self.uphill.first().map_or(f64::NAN, |v| v.y);
        let highest = self.uphill.last().map_or(f64::NAN, |v| v.y);
        (lowest, highest)
    }

    /// Horizontal position at elevation `z`, clamped to the slope ends.
    pub fn x_at(&self, z: f64) -> f64 {
        interpolate(&self.uphill, z, |v| v.y, |v| v.x)
    }

    /// Elevation at horizontal position `x`, clamped to the slope ends.
    pub fn z_at(&self, x: f64) -> f64 {
        // Schematization order runs seaward to landward, so x is non-decreasing.
        interpolate(&self.vertices, x, |v| v.x, |v| v.y)
    }
}

/// Linear interpolation over `points` sorted non-decreasingly by `key`.
///
/// On a run of equal keys the first point of the run wins.
fn interpolate(
    points: &[DVec2],
    at: f64,
    key: impl Fn(&DVec2) -> f64,
    value: impl Fn(&DVec2) -> f64,
) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return f64::NAN;
    };
    if at <= key(first) {
        return value(first);
    }
    if at > key(last) {
        return value(last);
    }

    let upper = points.partition_point(|p| key(p) < at);
    let hi = &points[upper];
    if key(hi) == at {
        return value(hi);
    }

    // key(lo) < at < key(hi) here, so the span is never zero.
    let lo = &points[upper - 1];
    let t = (at - key(lo)) / (key(hi) - key(lo));
    value(lo) + t * (value(hi) - value(lo))
}
