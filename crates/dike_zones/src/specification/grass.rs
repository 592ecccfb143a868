//! Grass wave impact zone specification.
use tracing::debug;

use crate::error::{Error, Result};
use crate::schematization::DikeSchematization;
use crate::specification::output::{GrassWaveImpactOutputLocation, OutputLocation};
use crate::specification::{CalculationMethod, TopLayerType, ZoneSpecification};
use crate::zone::ZoneDefinition;

/// Grass-covered zone, evaluated with [`CalculationMethod::GrassWaveImpact`].
#[non_exhaustive]
pub struct GrassWaveImpactZoneSpecification {
    pub zone_definition: Box<dyn ZoneDefinition>,
    /// Grass cover type; always one of the grass variants of [`TopLayerType`].
    pub top_layer_type: TopLayerType,
}

impl GrassWaveImpactZoneSpecification {
    pub fn try_new(
        zone_definition: Box<dyn ZoneDefinition>,
        top_layer_type: TopLayerType,
    ) -> Result<Self> {
        if !top_layer_type.is_grass() {
            return Err(Error::InvalidConfig(format!(
                "grass wave impact requires a grass top layer, got {top_layer_type}"
            )));
        }
        Ok(Self {
            zone_definition,
            top_layer_type,
        })
    }

    /// Create a specification over a concrete zone definition.
    pub fn try_new_with<Z: ZoneDefinition + 'static>(
        zone_definition: Z,
        top_layer_type: TopLayerType,
    ) -> Result<Self> {
        Self::try_new(Box::new(zone_definition), top_layer_type)
    }
}

impl ZoneSpecification for GrassWaveImpactZoneSpecification {
    fn calculation_method(&self) -> CalculationMethod {
        CalculationMethod::GrassWaveImpact
    }

    fn top_layer_type(&self) -> TopLayerType {
        self.top_layer_type
    }

    fn zone_definition(&self) -> &dyn ZoneDefinition {
        self.zone_definition.as_ref()
    }

    fn output_locations(&self, schematization: &DikeSchematization) -> Result<Vec<OutputLocation>> {
        let xs = self.zone_definition.x_coordinates(schematization)?;
        debug!(
            zone = %self.zone_definition,
            top_layer = %self.top_layer_type,
            locations = xs.len(),
            "expanded grass wave impact zone"
        );
        Ok(xs
            .into_iter()
            .map(|x| {
                OutputLocation::from(GrassWaveImpactOutputLocation::new(x, self.top_layer_type))
            })
            .collect())
    }
}
