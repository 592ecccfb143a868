//! Serializable descriptions of zones, specifications and plans.
//!
//! These mirror the runtime types but can be authored as data (enable the `serde`
//! feature). Deserialized values never pass through the validating constructors, so
//! every `build` validates before handing out trait objects.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::ZonePlan;
use crate::schematization::DikeSchematization;
use crate::specification::{
    AsphaltLayerParameters, AsphaltZoneSpecification, GrassWaveImpactZoneSpecification,
    TopLayerType, ZoneSpecification,
};
use crate::zone::{HorizontalZoneDefinition, VerticalZoneDefinition, ZoneDefinition};

/// A zone definition of either orientation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneDefinitionConfig {
    Horizontal(HorizontalZoneDefinition),
    Vertical(VerticalZoneDefinition),
}

impl ZoneDefinitionConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            ZoneDefinitionConfig::Horizontal(zone) => zone.validate(),
            ZoneDefinitionConfig::Vertical(zone) => zone.validate(),
        }
    }

    /// Validates and boxes the zone definition.
    pub fn build(self) -> Result<Box<dyn ZoneDefinition>> {
        self.validate()?;
        let zone: Box<dyn ZoneDefinition> = match self {
            ZoneDefinitionConfig::Horizontal(zone) => Box::new(zone),
            ZoneDefinitionConfig::Vertical(zone) => Box::new(zone),
        };
        Ok(zone)
    }
}

impl From<HorizontalZoneDefinition> for ZoneDefinitionConfig {
    fn from(value: HorizontalZoneDefinition) -> Self {
        ZoneDefinitionConfig::Horizontal(value)
    }
}

impl From<VerticalZoneDefinition> for ZoneDefinitionConfig {
    fn from(value: VerticalZoneDefinition) -> Self {
        ZoneDefinitionConfig::Vertical(value)
    }
}

/// A zone specification for one of the supported calculation methods.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneSpecificationConfig {
    Asphalt {
        zone: ZoneDefinitionConfig,
        parameters: AsphaltLayerParameters,
    },
    GrassWaveImpact {
        zone: ZoneDefinitionConfig,
        top_layer_type: TopLayerType,
    },
}

impl ZoneSpecificationConfig {
    /// Validates and builds the zone specification.
    pub fn build(self) -> Result<Box<dyn ZoneSpecification>> {
        let specification: Box<dyn ZoneSpecification> = match self {
            ZoneSpecificationConfig::Asphalt { zone, parameters } => Box::new(
                AsphaltZoneSpecification::from_parameters(zone.build()?, parameters),
            ),
            ZoneSpecificationConfig::GrassWaveImpact {
                zone,
                top_layer_type,
            } => Box::new(GrassWaveImpactZoneSpecification::try_new(
                zone.build()?,
                top_layer_type,
            )?),
        };
        Ok(specification)
    }
}

/// A schematization together with the zones to sample on it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct PlanConfig {
    pub schematization: DikeSchematization,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zones: Vec<ZoneSpecificationConfig>,
}

impl PlanConfig {
    pub fn new(schematization: DikeSchematization) -> Self {
        Self {
            schematization,
            zones: Vec::new(),
        }
    }

    /// Add a zone specification to the configuration.
    pub fn with_zone(mut self, zone: ZoneSpecificationConfig) -> Self {
        self.zones.push(zone);
        self
    }

    /// Validates everything and builds the runtime plan.
    pub fn build(self) -> Result<(DikeSchematization, ZonePlan)> {
        self.schematization.validate()?;
        let mut plan = ZonePlan::new();
        for zone in self.zones {
            plan = plan.with_zone_boxed(zone.build()?);
        }
        Ok((self.schematization, plan))
    }
}
