//! Output-location records produced by zone specifications.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::specification::asphalt::AsphaltLayerParameters;
use crate::specification::{CalculationMethod, TopLayerType};

/// Output location for the asphalt wave impact method.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct AsphaltOutputLocation {
    /// Horizontal position on the dike profile.
    pub x: f64,
    pub parameters: AsphaltLayerParameters,
}

impl AsphaltOutputLocation {
    pub fn new(x: f64, parameters: AsphaltLayerParameters) -> Self {
        Self { x, parameters }
    }
}

/// Output location for the grass wave impact method.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct GrassWaveImpactOutputLocation {
    /// Horizontal position on the dike profile.
    pub x: f64,
    pub top_layer_type: TopLayerType,
}

impl GrassWaveImpactOutputLocation {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self { x, top_layer_type }
    }
}

/// A sample point together with the parameters its calculation method needs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum OutputLocation {
    Asphalt(AsphaltOutputLocation),
    GrassWaveImpact(GrassWaveImpactOutputLocation),
}

impl OutputLocation {
    /// Horizontal position on the dike profile.
    pub fn x(&self) -> f64 {
        match self {
            OutputLocation::Asphalt(location) => location.x,
            OutputLocation::GrassWaveImpact(location) => location.x,
        }
    }

    pub fn calculation_method(&self) -> CalculationMethod {
        match self {
            OutputLocation::Asphalt(_) => CalculationMethod::AsphaltWaveImpact,
            OutputLocation::GrassWaveImpact(_) => CalculationMethod::GrassWaveImpact,
        }
    }

    pub fn top_layer_type(&self) -> TopLayerType {
        match self {
            OutputLocation::Asphalt(_) => TopLayerType::Wab,
            OutputLocation::GrassWaveImpact(location) => location.top_layer_type,
        }
    }

    pub fn as_asphalt(&self) -> Option<&AsphaltOutputLocation> {
        match self {
            OutputLocation::Asphalt(location) => Some(location),
            _ => None,
        }
    }

    pub fn as_grass_wave_impact(&self) -> Option<&GrassWaveImpactOutputLocation> {
        match self {
            OutputLocation::GrassWaveImpact(location) => Some(location),
            _ => None,
        }
    }
}

impl From<AsphaltOutputLocation> for OutputLocation {
    fn from(value: AsphaltOutputLocation) -> Self {
        OutputLocation::Asphalt(value)
    }
}

impl From<GrassWaveImpactOutputLocation> for OutputLocation {
    fn from(value: GrassWaveImpactOutputLocation) -> Self {
        OutputLocation::GrassWaveImpact(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_variant() {
        let grass: OutputLocation =
            GrassWaveImpactOutputLocation::new(171.0, TopLayerType::GrassClosedSod).into();
        assert_eq!(grass.x(), 171.0);
        assert_eq!(grass.calculation_method(), CalculationMethod::GrassWaveImpact);
        assert_eq!(grass.top_layer_type(), TopLayerType::GrassClosedSod);
        assert!(grass.as_asphalt().is_none());
        assert_eq!(
            grass.as_grass_wave_impact().map(|g| g.top_layer_type),
            Some(TopLayerType::GrassClosedSod)
        );
        assert!(!grass.top_layer_type().is_asphalt());

        let asphalt: OutputLocation =
            AsphaltOutputLocation::new(12.5, AsphaltLayerParameters::new(1.6, 64.0, 0.3, 18_000.0))
                .into();
        assert_eq!(asphalt.x(), 12.5);
        assert_eq!(asphalt.top_layer_type(), TopLayerType::Wab);
        assert!(asphalt.top_layer_type().is_asphalt());
        assert!(asphalt.as_grass_wave_impact().is_none());
        assert_eq!(asphalt.as_asphalt().map(|a| a.parameters.soil_elasticity), Some(64.0));
    }
}
