#![forbid(unsafe_code)]

use dike_zones::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Plan file shipped with the examples.
pub const DELTA_FLUME_PLAN: &str = include_str!("../plans/delta_flume.ron");

/// Initialize logging. `RUST_LOG` overrides the default filter.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dike_zones=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

/// Cross-section of the delta flume experiment, crest at the top of the slope.
pub fn delta_flume_schematization() -> Result<DikeSchematization> {
    DikeSchematization::from_vertices(
        [[154.4, 0.0], [160.0, 2.0], [170.48, 4.325], [191.48, 8.995]],
        vec![1.0; 4],
        160.0,
        191.48,
    )
}

/// Parses a RON plan description.
pub fn parse_plan(source: &str) -> anyhow::Result<PlanConfig> {
    Ok(ron::from_str(source)?)
}

/// Prints one line per output location.
pub fn print_locations(title: &str, locations: &[OutputLocation]) {
    println!("{title} ({} locations)", locations.len());
    for location in locations {
        match location {
            OutputLocation::Asphalt(asphalt) => println!(
                "  x={:>9.4}  {:<20}  flexural strength {} / soil {} / upper layer {} m @ {}",
                asphalt.x,
                location.calculation_method().to_string(),
                asphalt.parameters.flexural_strength,
                asphalt.parameters.soil_elasticity,
                asphalt.parameters.upper_layer_thickness,
                asphalt.parameters.upper_layer_elastic_modulus,
            ),
            other => println!(
                "  x={:>9.4}  {:<20}  {}",
                other.x(),
                other.calculation_method().to_string(),
                other.top_layer_type(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_repeatable() {
        init_tracing();
        init_tracing();
        tracing::info!("logging initialised twice");
    }

    #[test]
    fn shipped_plan_matches_hand_built_zones() {
        let config = parse_plan(DELTA_FLUME_PLAN).expect("plan parses");
        let (schematization, plan) = config.build().expect("plan builds");
        assert_eq!(schematization, delta_flume_schematization().unwrap());

        let horizontal =
            HorizontalZoneDefinition::try_new(160.0, 170.0, SampleCount::Fixed(3)).unwrap();
        let vertical = VerticalZoneDefinition::try_new(4.325, 8.995, SampleCount::MaxSpacing(0.5))
            .unwrap()
            .with_schematization_coordinates(true);
        let mut expected = horizontal.x_coordinates(&schematization).unwrap();
        expected.extend(vertical.x_coordinates(&schematization).unwrap());

        let xs: Vec<_> = plan
            .output_locations(&schematization)
            .unwrap()
            .iter()
            .map(OutputLocation::x)
            .collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn plan_survives_a_ron_round_trip() {
        let config = parse_plan(DELTA_FLUME_PLAN).unwrap();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(parse_plan(&text).unwrap(), config);
    }
}
