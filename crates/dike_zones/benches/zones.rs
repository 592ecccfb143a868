mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dike_zones::sampling::SampleCount;
use dike_zones::schematization::SlopeSide;
use dike_zones::specification::{AsphaltZoneSpecification, ZoneSpecification};
use dike_zones::zone::{HorizontalZoneDefinition, VerticalZoneDefinition, ZoneDefinition};

const SPACINGS: [f64; 4] = [1.0, 0.25, 0.05, 0.01];
const PROFILE_SIZES: [usize; 3] = [8, 64, 512];

fn horizontal_zone_benches(c: &mut Criterion) {
    let dike = common::random_dike(64, 0xD1CE);
    let x_max = dike.x_positions[dike.len() - 1];

    for splice in [false, true] {
        let mut group = c.benchmark_group(format!("zones/horizontal/splice_{splice}"));

        for &dx in &SPACINGS {
            let zone = HorizontalZoneDefinition::try_new(0.0, x_max, SampleCount::MaxSpacing(dx))
                .expect("valid zone")
                .with_schematization_coordinates(splice);
            let expected = zone.x_coordinates(&dike).expect("coordinates").len();
            group.throughput(common::elements_throughput(expected));

            group.bench_with_input(BenchmarkId::from_parameter(dx), &dx, |b, _| {
                b.iter(|| {
                    let xs = zone.x_coordinates(black_box(&dike)).expect("coordinates");
                    black_box(xs.len());
                });
            });
        }

        group.finish();
    }
}

fn vertical_zone_benches(c: &mut Criterion) {
    for side in [SlopeSide::Outer, SlopeSide::Inner] {
        let mut group = c.benchmark_group(format!("zones/vertical/{side}"));

        for &vertices in &PROFILE_SIZES {
            let dike = common::random_dike(vertices, 0xBEEF ^ vertices as u64);
            let (lowest, highest) = dike.slope(side).expect("slope").elevation_range();
            let samples = SampleCount::MaxSpacing(0.01);
            let zone = VerticalZoneDefinition::try_new(lowest, highest, samples)
                .expect("valid zone")
                .with_schematization_coordinates(true)
                .on_side(side);
            let expected = zone.x_coordinates(&dike).expect("coordinates").len();
            group.throughput(common::elements_throughput(expected));

            group.bench_with_input(BenchmarkId::from_parameter(vertices), &vertices, |b, _| {
                b.iter(|| {
                    let xs = zone.x_coordinates(black_box(&dike)).expect("coordinates");
                    black_box(xs.len());
                });
            });
        }

        group.finish();
    }
}

fn asphalt_specification_benches(c: &mut Criterion) {
    let dike = common::random_dike(64, 0xA5F);
    let x_max = dike.x_positions[dike.len() - 1];
    let mut group = c.benchmark_group("specification/asphalt");

    for &dx in &SPACINGS {
        let zone = HorizontalZoneDefinition::try_new(0.0, x_max, SampleCount::MaxSpacing(dx))
            .expect("valid zone");
        let spec = AsphaltZoneSpecification::new_with(zone, 1.6, 64.0, 0.3, 18_000.0);
        let expected = spec.output_locations(&dike).expect("locations").len();
        group.throughput(common::elements_throughput(expected));

        group.bench_with_input(BenchmarkId::from_parameter(dx), &dx, |b, _| {
            b.iter(|| {
                let locations = spec.output_locations(black_box(&dike)).expect("locations");
                black_box(locations.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = horizontal_zone_benches, vertical_zone_benches, asphalt_specification_benches
}
criterion_main!(benches);
