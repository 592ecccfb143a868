//! Zones declared directly in horizontal coordinates.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::sampling::{linspace, merge_coordinates, SampleCount};
use crate::schematization::DikeSchematization;
use crate::zone::{in_zone, validate_span, ZoneDefinition};

/// Zone spanning `[x_min, x_max]` along the horizontal axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct HorizontalZoneDefinition {
    /// Lower horizontal bound.
    pub x_min: f64,
    /// Upper horizontal bound.
    pub x_max: f64,
    /// Number of points, or the maximum spacing between them.
    pub samples: SampleCount,
    /// Splice profile vertices strictly inside the zone into the grid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_schematization_coordinates: bool,
}

impl HorizontalZoneDefinition {
    /// Creates a validated horizontal zone.
    pub fn try_new(x_min: f64, x_max: f64, samples: SampleCount) -> Result<Self> {
        let zone = Self {
            x_min,
            x_max,
            samples,
            include_schematization_coordinates: false,
        };
        zone.validate()?;
        Ok(zone)
    }

    /// Sets whether profile vertices inside the zone are included.
    pub fn with_schematization_coordinates(mut self, include: bool) -> Self {
        self.include_schematization_coordinates = include;
        self
    }

    /// Regular grid over the zone, without any schematization vertices.
    pub fn grid(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let n = self.samples.resolve(self.x_min, self.x_max)?;
        debug!(zone = %self, samples = n, "resolved horizontal sample count");
        Ok(linspace(self.x_min, self.x_max, n))
    }
}

impl ZoneDefinition for HorizontalZoneDefinition {
    fn x_coordinates(&self, schematization: &DikeSchematization) -> Result<Vec<f64>> {
        let grid = self.grid()?;
        schematization.validate()?;
        if !self.include_schematization_coordinates {
            return Ok(grid);
        }

        let inside = schematization
            .x_positions
            .iter()
            .copied()
            .filter(|&x| x > self.x_min && x < self.x_max);
        Ok(merge_coordinates(grid, inside))
    }

    fn includes_schematization_coordinates(&self) -> bool {
        self.include_schematization_coordinates
    }

    fn validate(&self) -> Result<()> {
        validate_span(self, self.x_min, self.x_max)?;
        self.samples
            .resolve(self.x_min, self.x_max)
            .map_err(|err| in_zone(self, err))?;
        Ok(())
    }
}

impl fmt::Display for HorizontalZoneDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizontal zone x=[{}, {}]", self.x_min, self.x_max)
    }
}
