use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::step::{
    location::{Location, deserialize_optional_location},
    meters::Meters,
    step_kind::StepKind,
    violation::Violation,
};

/// An atomic stop of a route, in the shape the solver returns it.
///
/// Durations are whole seconds on the wire. `duration` is the cumulative
/// travel time up to this step and `arrival` the arrival offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    #[serde(rename = "type")]
    kind: StepKind,

    #[serde(default)]
    description: String,

    #[serde(default, deserialize_with = "deserialize_optional_location")]
    #[schemars(with = "Option<[f64; 2]>")]
    location: Option<Location>,

    #[serde(default)]
    setup: u64,

    #[serde(default)]
    service: u64,

    #[serde(default)]
    duration: u64,

    #[serde(default)]
    waiting_time: u64,

    #[serde(default)]
    priority: u32,

    #[serde(default)]
    distance: Meters,

    #[serde(default)]
    arrival: u64,

    #[serde(default)]
    load: Vec<i64>,

    #[serde(default)]
    violations: Vec<Violation>,
}

impl RouteStep {
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn setup_duration(&self) -> SignedDuration {
        seconds(self.setup)
    }

    pub fn service_duration(&self) -> SignedDuration {
        seconds(self.service)
    }

    pub fn travel_duration(&self) -> SignedDuration {
        seconds(self.duration)
    }

    pub fn waiting_duration(&self) -> SignedDuration {
        seconds(self.waiting_time)
    }

    pub fn arrival(&self) -> SignedDuration {
        seconds(self.arrival)
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn load(&self) -> &[i64] {
        &self.load
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Time spent at the stop itself.
    pub fn total_duration(&self) -> SignedDuration {
        self.setup_duration() + self.service_duration() + self.waiting_duration()
    }

    pub fn is_pickup_of(&self, shipment_id: u64) -> bool {
        self.kind == StepKind::Pickup && self.id == Some(shipment_id)
    }

    pub fn is_delivery_of(&self, shipment_id: u64) -> bool {
        self.kind == StepKind::Delivery && self.id == Some(shipment_id)
    }

    /// Same kind and same description, i.e. the same stop on the map.
    pub(crate) fn is_same_stop(&self, other: &RouteStep) -> bool {
        self.kind == other.kind && self.description == other.description
    }
}

pub(crate) fn seconds(value: u64) -> SignedDuration {
    SignedDuration::from_secs(i64::try_from(value).unwrap_or(i64::MAX))
}

fn whole_seconds(duration: SignedDuration) -> u64 {
    duration.as_secs().unsigned_abs()
}

pub struct RouteStepBuilder {
    step: RouteStep,
}

impl RouteStepBuilder {
    pub fn new(kind: StepKind) -> Self {
        Self {
            step: RouteStep {
                id: None,
                kind,
                description: String::new(),
                location: None,
                setup: 0,
                service: 0,
                duration: 0,
                waiting_time: 0,
                priority: 0,
                distance: Meters::ZERO,
                arrival: 0,
                load: Vec::new(),
                violations: Vec::new(),
            },
        }
    }

    pub fn set_id(&mut self, id: u64) -> &mut RouteStepBuilder {
        self.step.id = Some(id);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut RouteStepBuilder {
        self.step.description = description.into();
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut RouteStepBuilder {
        self.step.location = Some(location);
        self
    }

    pub fn set_setup_duration(&mut self, setup: SignedDuration) -> &mut RouteStepBuilder {
        self.step.setup = whole_seconds(setup);
        self
    }

    pub fn set_service_duration(&mut self, service: SignedDuration) -> &mut RouteStepBuilder {
        self.step.service = whole_seconds(service);
        self
    }

    pub fn set_travel_duration(&mut self, duration: SignedDuration) -> &mut RouteStepBuilder {
        self.step.duration = whole_seconds(duration);
        self
    }

    pub fn set_arrival(&mut self, arrival: SignedDuration) -> &mut RouteStepBuilder {
        self.step.arrival = whole_seconds(arrival);
        self
    }

    pub fn set_distance(&mut self, distance: Meters) -> &mut RouteStepBuilder {
        self.step.distance = distance;
        self
    }

    pub fn build(self) -> RouteStep {
        self.step
    }
}
