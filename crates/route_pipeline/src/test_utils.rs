use jiff::SignedDuration;

use crate::step::{
    location::Location,
    meters::Meters,
    route_step::{RouteStep, RouteStepBuilder},
    step_kind::StepKind,
};

pub struct TestStep {
    pub kind: StepKind,
    pub id: Option<u64>,
    pub description: &'static str,
    pub location: Option<[f64; 2]>,
    pub arrival: u64,
    pub travel: u64,
    pub distance: f64,
}

impl Default for TestStep {
    fn default() -> Self {
        TestStep {
            kind: StepKind::Job,
            id: None,
            description: "",
            location: None,
            arrival: 0,
            travel: 0,
            distance: 0.0,
        }
    }
}

pub fn create_step(test_step: TestStep) -> RouteStep {
    let mut builder = RouteStepBuilder::new(test_step.kind);
    builder
        .set_description(test_step.description)
        .set_arrival(SignedDuration::from_secs(test_step.arrival as i64))
        .set_travel_duration(SignedDuration::from_secs(test_step.travel as i64))
        .set_distance(Meters::new(test_step.distance));

    if let Some(id) = test_step.id {
        builder.set_id(id);
    }

    if let Some([lon, lat]) = test_step.location {
        builder.set_location(Location::from_lon_lat(lon, lat));
    }

    builder.build()
}

pub fn start() -> RouteStep {
    create_step(TestStep {
        kind: StepKind::Start,
        description: "Depot",
        location: Some([12.37, 51.34]),
        ..TestStep::default()
    })
}

pub fn end() -> RouteStep {
    create_step(TestStep {
        kind: StepKind::End,
        description: "Depot",
        location: Some([12.37, 51.34]),
        ..TestStep::default()
    })
}

/// A located pickup whose description is derived from the shipment id.
pub fn pickup(id: u64) -> RouteStep {
    shipment_step(StepKind::Pickup, id)
}

/// A located delivery whose description is derived from the shipment id.
pub fn delivery(id: u64) -> RouteStep {
    shipment_step(StepKind::Delivery, id)
}

fn shipment_step(kind: StepKind, id: u64) -> RouteStep {
    let description = format!("{kind} {id}");
    let mut builder = RouteStepBuilder::new(kind);
    builder
        .set_id(id)
        .set_description(description)
        .set_location(Location::from_lon_lat(12.0 + id as f64 * 0.25, 51.0));

    builder.build()
}

pub fn describe(steps: &[RouteStep]) -> Vec<(StepKind, Option<u64>)> {
    steps.iter().map(|step| (step.kind(), step.id())).collect()
}
