use jiff::SignedDuration;

use crate::{
    display::route_stop::RouteStop,
    step::{location::Location, meters::Meters, route_step::RouteStep, step_kind::StepKind},
};

/// Adjacent steps at the same stop, shown as one unit.
///
/// Always holds at least two steps, all with the same kind and description.
/// Scalar accessors read the first step, except [`RouteStop::location`]
/// which reads the first step that has one.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRouteStep {
    route_steps: Vec<RouteStep>,
}

impl AggregatedRouteStep {
    pub(crate) fn new(first: RouteStep, second: RouteStep) -> Self {
        debug_assert!(first.is_same_stop(&second));

        Self {
            route_steps: vec![first, second],
        }
    }

    pub(crate) fn push(&mut self, route_step: RouteStep) {
        debug_assert!(self.first().is_same_stop(&route_step));

        self.route_steps.push(route_step);
    }

    pub fn route_steps(&self) -> &[RouteStep] {
        &self.route_steps
    }

    pub fn into_route_steps(self) -> Vec<RouteStep> {
        self.route_steps
    }

    pub fn len(&self) -> usize {
        self.route_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route_steps.is_empty()
    }

    /// The member that stands in for the whole stop on the map.
    pub fn located_step(&self) -> Option<&RouteStep> {
        self.route_steps.iter().find(|step| step.has_location())
    }

    fn first(&self) -> &RouteStep {
        &self.route_steps[0]
    }
}

impl RouteStop for AggregatedRouteStep {
    fn kind(&self) -> StepKind {
        self.first().kind()
    }

    fn description(&self) -> &str {
        self.first().description()
    }

    fn location(&self) -> Option<&Location> {
        self.located_step().and_then(RouteStep::location)
    }

    fn distance(&self) -> Meters {
        self.first().distance()
    }

    fn travel_duration(&self) -> SignedDuration {
        self.first().travel_duration()
    }

    fn arrival(&self) -> SignedDuration {
        self.first().arrival()
    }

    fn total_duration(&self) -> SignedDuration {
        self.first().total_duration()
    }

    fn shipment_ids(&self) -> Vec<u64> {
        self.route_steps.iter().filter_map(RouteStep::id).collect()
    }
}
