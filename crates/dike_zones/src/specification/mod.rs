//! Zone specifications: a zone definition bound to a calculation method and top layer.
//!
//! A specification expands the coordinates of its zone into [`OutputLocation`] records,
//! each carrying the same static parameters. Parameters that vary along the dike are
//! expressed by composing several specifications over disjoint zones (see
//! [`crate::plan::ZonePlan`]).
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schematization::DikeSchematization;
use crate::zone::ZoneDefinition;

pub mod asphalt;
pub mod grass;
pub mod output;

pub use asphalt::{AsphaltLayerParameters, AsphaltZoneSpecification};
pub use grass::GrassWaveImpactZoneSpecification;
pub use output::{AsphaltOutputLocation, GrassWaveImpactOutputLocation, OutputLocation};

/// Calculation method an output location is evaluated with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum CalculationMethod {
    AsphaltWaveImpact,
    GrassWaveImpact,
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::AsphaltWaveImpact => f.write_str("asphalt wave impact"),
            CalculationMethod::GrassWaveImpact => f.write_str("grass wave impact"),
        }
    }
}

/// Surface material of the revetment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TopLayerType {
    /// Open-graded asphalt concrete (waterbouwasfaltbeton).
    Wab,
    GrassClosedSod,
    GrassOpenSod,
}

impl TopLayerType {
    pub fn is_asphalt(self) -> bool {
        matches!(self, TopLayerType::Wab)
    }

    pub fn is_grass(self) -> bool {
        matches!(self, TopLayerType::GrassClosedSod | TopLayerType::GrassOpenSod)
    }
}

impl fmt::Display for TopLayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopLayerType::Wab => f.write_str("WAB"),
            TopLayerType::GrassClosedSod => f.write_str("grass closed sod"),
            TopLayerType::GrassOpenSod => f.write_str("grass open sod"),
        }
    }
}

/// Trait for expanding a zone into output locations for one calculation method.
pub trait ZoneSpecification: Send + Sync {
    fn calculation_method(&self) -> CalculationMethod;

    fn top_layer_type(&self) -> TopLayerType;

    /// Zone whose coordinates this specification expands.
    fn zone_definition(&self) -> &dyn ZoneDefinition;

    /// One record per zone coordinate, in coordinate order.
    ///
    /// Errors from the zone definition are returned unchanged.
    fn output_locations(&self, schematization: &DikeSchematization) -> Result<Vec<OutputLocation>>;
}
