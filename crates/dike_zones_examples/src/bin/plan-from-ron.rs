use std::path::PathBuf;

use anyhow::Context;
use dike_zones_examples::{init_tracing, parse_plan, print_locations, DELTA_FLUME_PLAN};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Optional path to a plan file; the shipped delta flume plan otherwise.
    let source = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading plan {}", path.display()))?,
        None => DELTA_FLUME_PLAN.to_owned(),
    };

    let config = parse_plan(&source)?;
    info!(zones = config.zones.len(), "loaded plan");
    let (schematization, plan) = config.build()?;

    let locations = plan.output_locations(&schematization)?;
    print_locations("plan from RON", &locations);

    Ok(())
}
