#![forbid(unsafe_code)]
//! dike_zones: Output-location sampling along dike cross-sections.
//!
//! Modules:
//! - schematization: the dike profile interface, slope sides, and per-slope interpolation
//! - sampling: sample-count policies, evenly spaced grids, and tolerance-aware merging
//! - zone: horizontal and vertical zone definitions producing x-coordinates
//! - specification: zone specifications producing output locations per calculation method
//! - plan: ordered composition of zone specifications
//! - config: data-authorable zones, specifications and plans (with the `serde` feature)
//!
//! For examples and docs, see README and docs.rs.
pub mod config;
pub mod error;
pub mod plan;
pub mod sampling;
pub mod schematization;
pub mod specification;
pub mod zone;

/// Convenient re-exports for common types. Import with `use dike_zones::prelude::*;`.
pub mod prelude {
    pub use crate::config::{PlanConfig, ZoneDefinitionConfig, ZoneSpecificationConfig};
    pub use crate::error::{Error, GeometryError, Result};
    pub use crate::plan::ZonePlan;
    pub use crate::sampling::{SampleCount, COORDINATE_TOLERANCE};
    pub use crate::schematization::{DikeSchematization, SlopeProfile, SlopeSide};
    pub use crate::specification::{
        AsphaltLayerParameters, AsphaltOutputLocation, AsphaltZoneSpecification,
        CalculationMethod, GrassWaveImpactOutputLocation, GrassWaveImpactZoneSpecification,
        OutputLocation, TopLayerType, ZoneSpecification,
    };
    pub use crate::zone::{HorizontalZoneDefinition, VerticalZoneDefinition, ZoneDefinition};
}
