use dike_zones::prelude::*;
use dike_zones_examples::{delta_flume_schematization, init_tracing, print_locations};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let schematization = delta_flume_schematization()?;

    // Stronger asphalt on the lower band, weaker above; grass from the berm line up.
    let lower = HorizontalZoneDefinition::try_new(160.0, 165.0, SampleCount::Fixed(3))?;
    let upper = HorizontalZoneDefinition::try_new(166.0, 170.0, SampleCount::MaxSpacing(1.5))?
        .with_schematization_coordinates(true);
    let grass = VerticalZoneDefinition::try_new(4.5, 8.995, SampleCount::MaxSpacing(0.75))?;

    let plan = ZonePlan::new()
        .with_zone(
            AsphaltZoneSpecification::new_with(lower, 2.1, 64.0, 0.3, 18_000.0)
                .with_sub_layer(0.2, 9_000.0),
        )
        .with_zone(AsphaltZoneSpecification::new_with(upper, 1.6, 64.0, 0.25, 16_000.0))
        .with_zone(GrassWaveImpactZoneSpecification::try_new_with(
            grass,
            TopLayerType::GrassClosedSod,
        )?);

    let locations = plan.output_locations(&schematization)?;
    print_locations("delta flume plan", &locations);

    Ok(())
}
