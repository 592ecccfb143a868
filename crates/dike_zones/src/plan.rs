//! Planning module for composing zone specifications along one dike.
use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::sampling::COORDINATE_TOLERANCE;
use crate::schematization::DikeSchematization;
use crate::specification::{OutputLocation, ZoneSpecification};

/// An ordered set of zone specifications evaluated against the same schematization.
///
/// Zones of the same calculation method are expected to be disjoint; overlapping
/// locations are reported but kept.
#[derive(Default)]
#[non_exhaustive]
pub struct ZonePlan {
    pub zones: Vec<Box<dyn ZoneSpecification>>,
}

impl ZonePlan {
    /// Create a new empty plan.
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Add a concrete zone specification to the plan.
    pub fn with_zone<S: ZoneSpecification + 'static>(self, zone: S) -> Self {
        self.with_zone_boxed(Box::new(zone))
    }

    pub fn with_zone_boxed(mut self, zone: Box<dyn ZoneSpecification>) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Output locations of every zone, concatenated in plan order.
    ///
    /// The first failing zone aborts the plan and its error is returned unchanged.
    pub fn output_locations(
        &self,
        schematization: &DikeSchematization,
    ) -> Result<Vec<OutputLocation>> {
        let _span = info_span!("zone_plan", zones = self.zones.len()).entered();

        let mut locations = Vec::new();
        let mut owners = Vec::new();
        for (index, zone) in self.zones.iter().enumerate() {
            let produced = zone.output_locations(schematization)?;
            owners.extend(std::iter::repeat(index).take(produced.len()));
            locations.extend(produced);
        }

        report_overlaps(&locations, &owners, self);
        info!(locations = locations.len(), "zone plan expanded");
        Ok(locations)
    }
}

/// Warns about locations of the same method produced by more than one zone.
fn report_overlaps(locations: &[OutputLocation], owners: &[usize], plan: &ZonePlan) {
    let mut order: Vec<usize> = (0..locations.len()).collect();
    order.sort_by(|&a, &b| {
        locations[a]
            .calculation_method()
            .cmp(&locations[b].calculation_method())
            .then(locations[a].x().total_cmp(&locations[b].x()))
    });

    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let same_method = locations[a].calculation_method() == locations[b].calculation_method();
        let near = (locations[a].x() - locations[b].x()).abs() <= COORDINATE_TOLERANCE;
        if same_method && near && owners[a] != owners[b] {
            warn!(
                x = locations[a].x(),
                method = %locations[a].calculation_method(),
                first = %plan.zones[owners[a]].zone_definition(),
                second = %plan.zones[owners[b]].zone_definition(),
                "zones overlap at an output location"
            );
        }
    }
}
