//! Zone definitions: declared spans along the dike that resolve to x-coordinates.
//!
//! A zone is either horizontal ([`HorizontalZoneDefinition`], sampled along x directly)
//! or vertical ([`VerticalZoneDefinition`], sampled along z and projected back onto the
//! profile). Both implement [`ZoneDefinition`], which is the seam zone specifications
//! depend on.
use std::fmt;

use crate::error::{Error, Result};
use crate::schematization::DikeSchematization;

pub mod horizontal;
pub mod vertical;

pub use horizontal::HorizontalZoneDefinition;
pub use vertical::VerticalZoneDefinition;

/// Trait for coordinate generation over a zone.
///
/// The [`fmt::Display`] output names the zone and its bounds and is used as error context.
pub trait ZoneDefinition: fmt::Display + Send + Sync {
    /// Ordered x-coordinates of the output locations in this zone.
    fn x_coordinates(&self, schematization: &DikeSchematization) -> Result<Vec<f64>>;

    /// Whether profile vertices inside the zone are spliced into the grid.
    fn includes_schematization_coordinates(&self) -> bool;

    /// Checks the zone configuration without evaluating it.
    fn validate(&self) -> Result<()>;
}

/// Shared bound checks for a zone span.
pub(crate) fn validate_span(zone: &dyn fmt::Display, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::InvalidZone {
            zone: zone.to_string(),
            reason: "bounds must be finite".into(),
        });
    }
    if min >= max {
        return Err(Error::InvalidZone {
            zone: zone.to_string(),
            reason: format!("lower bound {min} must be below upper bound {max}"),
        });
    }
    Ok(())
}

/// Re-labels a sample-count error with the zone it belongs to.
pub(crate) fn in_zone(zone: &dyn fmt::Display, err: Error) -> Error {
    match err {
        Error::InvalidConfig(reason) => Error::InvalidZone {
            zone: zone.to_string(),
            reason,
        },
        other => other,
    }
}
