use dike_zones::prelude::*;
use dike_zones_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Outer slope with a berm at z=3, crest at x=32, inner slope down to x=54.
    let schematization = DikeSchematization::new(
        vec![0.0, 12.0, 20.0, 32.0, 36.0, 54.0],
        vec![0.0, 3.0, 3.0, 9.0, 9.0, 1.0],
        vec![1.0; 6],
        0.0,
        32.0,
    )?;

    let zone = VerticalZoneDefinition::try_new(2.0, 8.0, SampleCount::MaxSpacing(1.0))?;
    for side in [SlopeSide::Outer, SlopeSide::Inner] {
        let slope = schematization.slope(side)?;
        let xs = zone.x_coordinates_on(&schematization, side)?;
        println!("{side} slope:");
        for x in xs {
            println!("  x={x:>8.3}  z={:>6.3}", slope.z_at(x));
        }
    }

    // Splicing keeps the berm corners at x=12 and x=20 exactly.
    let spliced = zone.with_schematization_coordinates(true);
    println!("spliced outer: {:?}", spliced.x_coordinates(&schematization)?);

    // A crest in front of the profile leaves no outer slope to project onto.
    let mut seaward_crest = schematization.clone();
    seaward_crest.outer_crest = -5.0;
    if let Err(err) = spliced.x_coordinates(&seaward_crest) {
        println!("expected failure: {err}");
    }

    Ok(())
}
