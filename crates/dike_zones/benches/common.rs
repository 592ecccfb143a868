use std::time::Duration;

use criterion::{Criterion, Throughput};
use dike_zones::schematization::DikeSchematization;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Random dike with `vertices` points rising to a crest and falling behind it.
pub fn random_dike(vertices: usize, seed: u64) -> DikeSchematization {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut unit = || (rng.next_u32() as f64) / (u32::MAX as f64 + 1.0);

    let rising = (vertices / 2).max(2);
    let mut xs = vec![0.0];
    let mut zs = vec![0.0];
    for _ in 1..rising {
        xs.push(xs[xs.len() - 1] + 1.0 + 4.0 * unit());
        zs.push(zs[zs.len() - 1] + 0.1 + unit());
    }
    let crest = xs[xs.len() - 1];
    for _ in rising..vertices.max(rising + 1) {
        xs.push(xs[xs.len() - 1] + 1.0 + 4.0 * unit());
        zs.push(zs[zs.len() - 1] - 0.1 - unit());
    }

    let n = xs.len();
    DikeSchematization::new(xs, zs, vec![1.0; n], 0.0, crest).expect("generated dike is valid")
}
