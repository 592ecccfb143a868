//! Asphalt wave impact zone specification.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::schematization::DikeSchematization;
use crate::specification::output::{AsphaltOutputLocation, OutputLocation};
use crate::specification::{CalculationMethod, TopLayerType, ZoneSpecification};
use crate::zone::ZoneDefinition;

/// Static layer parameters shared by every location in an asphalt zone.
///
/// The sub-layer, fatigue and stiffness-relation fields stay unset until a later
/// configuration stage fills them in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct AsphaltLayerParameters {
    /// Flexural strength of the asphalt.
    pub flexural_strength: f64,
    /// Spring constant of the soil underneath.
    pub soil_elasticity: f64,
    pub upper_layer_thickness: f64,
    /// Stiffness modulus of the upper layer.
    pub upper_layer_elastic_modulus: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_layer_thickness: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_layer_elastic_modulus: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fatigue_alpha: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fatigue_beta: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stiffness_relation_nu: Option<f64>,
}

impl AsphaltLayerParameters {
    pub fn new(
        flexural_strength: f64,
        soil_elasticity: f64,
        upper_layer_thickness: f64,
        upper_layer_elastic_modulus: f64,
    ) -> Self {
        Self {
            flexural_strength,
            soil_elasticity,
            upper_layer_thickness,
            upper_layer_elastic_modulus,
            sub_layer_thickness: None,
            sub_layer_elastic_modulus: None,
            fatigue_alpha: None,
            fatigue_beta: None,
            stiffness_relation_nu: None,
        }
    }
}

/// Asphalt revetment zone, evaluated with [`CalculationMethod::AsphaltWaveImpact`].
#[non_exhaustive]
pub struct AsphaltZoneSpecification {
    /// Zone whose coordinates become output locations.
    pub zone_definition: Box<dyn ZoneDefinition>,
    pub parameters: AsphaltLayerParameters,
}

impl AsphaltZoneSpecification {
    pub fn new(
        zone_definition: Box<dyn ZoneDefinition>,
        flexural_strength: f64,
        spring_constant_soil: f64,
        upper_layer_thickness: f64,
        upper_layer_stiffness_modulus: f64,
    ) -> Self {
        Self::from_parameters(
            zone_definition,
            AsphaltLayerParameters::new(
                flexural_strength,
                spring_constant_soil,
                upper_layer_thickness,
                upper_layer_stiffness_modulus,
            ),
        )
    }

    /// Create a specification over a concrete zone definition.
    pub fn new_with<Z: ZoneDefinition + 'static>(
        zone_definition: Z,
        flexural_strength: f64,
        spring_constant_soil: f64,
        upper_layer_thickness: f64,
        upper_layer_stiffness_modulus: f64,
    ) -> Self {
        Self::new(
            Box::new(zone_definition),
            flexural_strength,
            spring_constant_soil,
            upper_layer_thickness,
            upper_layer_stiffness_modulus,
        )
    }

    pub fn from_parameters(
        zone_definition: Box<dyn ZoneDefinition>,
        parameters: AsphaltLayerParameters,
    ) -> Self {
        Self {
            zone_definition,
            parameters,
        }
    }

    /// Set the thickness and stiffness modulus of the sub-layer.
    pub fn with_sub_layer(mut self, thickness: f64, elastic_modulus: f64) -> Self {
        self.parameters.sub_layer_thickness = Some(thickness);
        self.parameters.sub_layer_elastic_modulus = Some(elastic_modulus);
        self
    }

    /// Set the fatigue coefficients.
    pub fn with_fatigue(mut self, alpha: f64, beta: f64) -> Self {
        self.parameters.fatigue_alpha = Some(alpha);
        self.parameters.fatigue_beta = Some(beta);
        self
    }

    pub fn with_stiffness_relation_nu(mut self, nu: f64) -> Self {
        self.parameters.stiffness_relation_nu = Some(nu);
        self
    }

    /// Asphalt records for every coordinate of the zone.
    pub fn asphalt_locations(
        &self,
        schematization: &DikeSchematization,
    ) -> Result<Vec<AsphaltOutputLocation>> {
        let xs = self.zone_definition.x_coordinates(schematization)?;
        debug!(
            zone = %self.zone_definition,
            locations = xs.len(),
            "expanded asphalt zone"
        );
        Ok(xs
            .into_iter()
            .map(|x| AsphaltOutputLocation::new(x, self.parameters))
            .collect())
    }
}

impl ZoneSpecification for AsphaltZoneSpecification {
    fn calculation_method(&self) -> CalculationMethod {
        CalculationMethod::AsphaltWaveImpact
    }

    fn top_layer_type(&self) -> TopLayerType {
        TopLayerType::Wab
    }

    fn zone_definition(&self) -> &dyn ZoneDefinition {
        self.zone_definition.as_ref()
    }

    fn output_locations(&self, schematization: &DikeSchematization) -> Result<Vec<OutputLocation>> {
        Ok(self
            .asphalt_locations(schematization)?
            .into_iter()
            .map(OutputLocation::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, GeometryError};
    use crate::sampling::SampleCount;
    use crate::zone::{HorizontalZoneDefinition, VerticalZoneDefinition};

    fn schematization() -> DikeSchematization {
        DikeSchematization::new(
            vec![154.4, 160.0, 170.48, 191.48],
            vec![0.0, 2.0, 4.325, 8.995],
            vec![1.0; 4],
            160.0,
            191.48,
        )
        .unwrap()
    }

    #[test]
    fn one_record_per_coordinate_with_identical_parameters() {
        let zone = HorizontalZoneDefinition::try_new(160.0, 170.0, SampleCount::Fixed(3)).unwrap();
        let expected_xs = zone.x_coordinates(&schematization()).unwrap();
        let spec = AsphaltZoneSpecification::new_with(zone, 1.6, 64.0, 0.3, 18_000.0);

        let locations = spec.output_locations(&schematization()).unwrap();
        assert_eq!(locations.len(), 3);
        let xs: Vec<_> = locations.iter().map(OutputLocation::x).collect();
        assert_eq!(xs, expected_xs);

        for location in &locations {
            let asphalt = location.as_asphalt().expect("asphalt record");
            assert_eq!(asphalt.parameters.flexural_strength, 1.6);
            assert_eq!(asphalt.parameters.soil_elasticity, 64.0);
            assert_eq!(asphalt.parameters.upper_layer_thickness, 0.3);
            assert_eq!(asphalt.parameters.upper_layer_elastic_modulus, 18_000.0);
            assert_eq!(asphalt.parameters.sub_layer_thickness, None);
            assert_eq!(asphalt.parameters.fatigue_alpha, None);
        }
    }

    #[test]
    fn tags_are_fixed() {
        let zone = HorizontalZoneDefinition::try_new(0.0, 1.0, SampleCount::Fixed(2)).unwrap();
        let spec = AsphaltZoneSpecification::new_with(zone, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(spec.calculation_method(), CalculationMethod::AsphaltWaveImpact);
        assert_eq!(spec.top_layer_type(), TopLayerType::Wab);
        assert_eq!(
            spec.zone_definition().to_string(),
            "horizontal zone x=[0, 1]"
        );
    }

    #[test]
    fn optional_layers_are_carried_to_every_location() {
        let zone = HorizontalZoneDefinition::try_new(160.0, 190.0, SampleCount::MaxSpacing(10.0))
            .unwrap();
        let spec = AsphaltZoneSpecification::new_with(zone, 1.6, 64.0, 0.3, 18_000.0)
            .with_sub_layer(0.2, 9_000.0)
            .with_fatigue(0.5, 5.4)
            .with_stiffness_relation_nu(0.35);

        let locations = spec.asphalt_locations(&schematization()).unwrap();
        assert_eq!(locations.len(), 4);
        assert!(locations.iter().all(|l| l.parameters == spec.parameters));
        assert_eq!(spec.parameters.sub_layer_elastic_modulus, Some(9_000.0));
        assert_eq!(spec.parameters.fatigue_beta, Some(5.4));
    }

    #[test]
    fn geometry_errors_propagate_unchanged() {
        let zone = VerticalZoneDefinition::try_new(2.0, 8.0, SampleCount::Fixed(3)).unwrap();
        let mut s = schematization();
        s.outer_crest = 100.0;

        let direct = zone.x_coordinates(&s).unwrap_err().to_string();
        let spec = AsphaltZoneSpecification::new_with(zone, 1.6, 64.0, 0.3, 18_000.0);
        let err = spec.output_locations(&s).unwrap_err();
        assert!(matches!(
            err,
            Error::Geometry {
                source: GeometryError::EmptySlope { .. },
                ..
            }
        ));
        assert_eq!(err.to_string(), direct);
    }
}
