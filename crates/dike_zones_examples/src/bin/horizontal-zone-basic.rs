use dike_zones::prelude::*;
use dike_zones_examples::{delta_flume_schematization, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let schematization = delta_flume_schematization()?;

    // Fixed number of points vs. a maximum spacing over the same span.
    let fixed = HorizontalZoneDefinition::try_new(100.0, 200.0, SampleCount::Fixed(5))?;
    let spaced = HorizontalZoneDefinition::try_new(100.0, 200.0, SampleCount::MaxSpacing(40.0))?;
    println!("{fixed}, 5 points:      {:?}", fixed.x_coordinates(&schematization)?);
    println!("{spaced}, dx <= 40: {:?}", spaced.x_coordinates(&schematization)?);

    // Profile vertices strictly inside the zone are spliced in.
    let spliced = spaced.with_schematization_coordinates(true);
    println!("{spliced}, spliced:  {:?}", spliced.x_coordinates(&schematization)?);

    Ok(())
}
