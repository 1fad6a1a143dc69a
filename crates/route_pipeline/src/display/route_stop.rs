use jiff::SignedDuration;

use crate::step::{kmh::Kmh, location::Location, meters::Meters, step_kind::StepKind};

/// Read accessors shared by every unit shown on a route: a single step or
/// a run of steps at the same stop.
pub trait RouteStop {
    fn kind(&self) -> StepKind;

    fn description(&self) -> &str;

    fn location(&self) -> Option<&Location>;

    fn distance(&self) -> Meters;

    fn travel_duration(&self) -> SignedDuration;

    fn arrival(&self) -> SignedDuration;

    fn total_duration(&self) -> SignedDuration;

    /// Shipment ids served at this stop, in route order.
    fn shipment_ids(&self) -> Vec<u64>;

    fn has_location(&self) -> bool {
        self.location().is_some()
    }

    fn average_speed(&self) -> Option<Kmh> {
        self.distance() / self.travel_duration()
    }
}
