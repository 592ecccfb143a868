//! Zones declared in elevation and projected onto one slope of the dike.
//!
//! Sampling happens along z; every z-sample is mapped to the horizontal position where
//! the selected slope reaches that elevation. Samples above or below the slope are
//! clamped to its ends, and a zone that misses the slope entirely is a geometry error.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, GeometryError, Result};
use crate::sampling::{linspace, merge_coordinates, SampleCount};
use crate::schematization::{DikeSchematization, SlopeSide};
use crate::zone::{in_zone, validate_span, ZoneDefinition};

/// Zone spanning `[z_min, z_max]` in elevation on one side of the outer crest.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct VerticalZoneDefinition {
    /// Lower elevation bound.
    pub z_min: f64,
    /// Upper elevation bound.
    pub z_max: f64,
    /// Number of points, or the maximum vertical spacing between them.
    pub samples: SampleCount,
    /// Splice slope vertices with an elevation inside the zone into the result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_schematization_coordinates: bool,
    /// Slope the zone is projected onto.
    #[cfg_attr(feature = "serde", serde(default))]
    pub side: SlopeSide,
}

impl VerticalZoneDefinition {
    /// Creates a validated vertical zone on the outer slope.
    pub fn try_new(z_min: f64, z_max: f64, samples: SampleCount) -> Result<Self> {
        let zone = Self {
            z_min,
            z_max,
            samples,
            include_schematization_coordinates: false,
            side: SlopeSide::Outer,
        };
        zone.validate()?;
        Ok(zone)
    }

    /// Sets whether slope vertices inside the zone are included.
    pub fn with_schematization_coordinates(mut self, include: bool) -> Self {
        self.include_schematization_coordinates = include;
        self
    }

    /// Sets the slope the zone is projected onto.
    pub fn on_side(mut self, side: SlopeSide) -> Self {
        self.side = side;
        self
    }

    /// Projects the zone onto the inner slope.
    pub fn on_inner_slope(self) -> Self {
        self.on_side(SlopeSide::Inner)
    }

    /// Sorted x-coordinates of this zone projected onto `side`, ignoring the configured side.
    pub fn x_coordinates_on(
        &self,
        schematization: &DikeSchematization,
        side: SlopeSide,
    ) -> Result<Vec<f64>> {
        self.validate()?;
        schematization.validate()?;

        let slope = schematization
            .slope(side)
            .map_err(|source| self.geometry_error(source))?;

        let (lowest, highest) = slope.elevation_range();
        if self.z_max < lowest || self.z_min > highest {
            return Err(self.geometry_error(GeometryError::ZoneOutsideSlope {
                side,
                z_min: self.z_min,
                z_max: self.z_max,
                lowest,
                highest,
            }));
        }

        let n = self.samples.resolve(self.z_min, self.z_max)?;
        let z_samples = linspace(self.z_min, self.z_max, n);
        let clamped = z_samples
            .iter()
            .filter(|&&z| z < lowest || z > highest)
            .count();
        if clamped > 0 {
            debug!(
                zone = %self,
                %side,
                clamped,
                lowest,
                highest,
                "elevation samples beyond the slope were clamped to its ends"
            );
        }

        let projected = z_samples.iter().map(|&z| slope.x_at(z)).collect::<Vec<_>>();
        debug!(zone = %self, %side, samples = n, "projected vertical zone onto slope");

        if !self.include_schematization_coordinates {
            return Ok(merge_coordinates(projected, std::iter::empty()));
        }

        let vertices = slope
            .vertices()
            .iter()
            .filter(|v| v.y >= self.z_min && v.y <= self.z_max)
            .map(|v| v.x);
        Ok(merge_coordinates(projected, vertices))
    }

    fn geometry_error(&self, source: GeometryError) -> Error {
        Error::Geometry {
            zone: self.to_string(),
            source,
        }
    }
}

impl ZoneDefinition for VerticalZoneDefinition {
    fn x_coordinates(&self, schematization: &DikeSchematization) -> Result<Vec<f64>> {
        self.x_coordinates_on(schematization, self.side)
    }

    fn includes_schematization_coordinates(&self) -> bool {
        self.include_schematization_coordinates
    }

    fn validate(&self) -> Result<()> {
        validate_span(self, self.z_min, self.z_max)?;
        self.samples
            .resolve(self.z_min, self.z_max)
            .map_err(|err| in_zone(self, err))?;
        Ok(())
    }
}

impl fmt::Display for VerticalZoneDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vertical zone z=[{}, {}] on the {} slope",
            self.z_min, self.z_max, self.side
        )
    }
}
