use geojson::{Feature, Geometry, JsonObject, Value};
use jiff::{SignedDuration, Zoned};
use serde_json::json;

use crate::{
    display::{aggregated_route_step::AggregatedRouteStep, route_stop::RouteStop},
    error::RouteError,
    format::point_label,
    step::{location::Location, meters::Meters, route_step::RouteStep, step_kind::StepKind},
};

/// A unit of the final, display-ready step sequence of a route.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayStep {
    Single(RouteStep),
    Aggregated(AggregatedRouteStep),
}

impl DisplayStep {
    /// The underlying steps, in route order.
    pub fn route_steps(&self) -> &[RouteStep] {
        match self {
            DisplayStep::Single(step) => std::slice::from_ref(step),
            DisplayStep::Aggregated(aggregated) => aggregated.route_steps(),
        }
    }

    pub fn into_route_steps(self) -> Vec<RouteStep> {
        match self {
            DisplayStep::Single(step) => vec![step],
            DisplayStep::Aggregated(aggregated) => aggregated.into_route_steps(),
        }
    }

    /// The step that represents this unit on the map.
    pub fn located_step(&self) -> Option<&RouteStep> {
        match self {
            DisplayStep::Single(step) => step.has_location().then_some(step),
            DisplayStep::Aggregated(aggregated) => aggregated.located_step(),
        }
    }

    /// Point feature of this unit, labelled as the `index`-th located stop.
    ///
    /// Fails with [`RouteError::MissingLocation`] when no underlying step has
    /// a location; callers are expected to filter on `has_location` first.
    pub fn to_point_feature(
        &self,
        index: usize,
        departure: Option<&Zoned>,
    ) -> Result<Feature, RouteError> {
        let step = self.located_step().ok_or(RouteError::MissingLocation)?;
        let location = step.location().ok_or(RouteError::MissingLocation)?;

        let mut properties = JsonObject::new();
        properties.insert(String::from("type"), json!(step.kind().as_str()));
        properties.insert(
            String::from("description"),
            json!(point_label(step, index, departure)?),
        );
        properties.insert(String::from("index"), json!(index));

        Ok(Feature {
            geometry: Some(Geometry::new(Value::Point(location.position()))),
            properties: Some(properties),
            ..Default::default()
        })
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, DisplayStep::Aggregated(_))
    }

    fn as_stop(&self) -> &dyn RouteStop {
        match self {
            DisplayStep::Single(step) => step,
            DisplayStep::Aggregated(aggregated) => aggregated,
        }
    }
}

impl From<RouteStep> for DisplayStep {
    fn from(step: RouteStep) -> Self {
        DisplayStep::Single(step)
    }
}

impl From<AggregatedRouteStep> for DisplayStep {
    fn from(aggregated: AggregatedRouteStep) -> Self {
        DisplayStep::Aggregated(aggregated)
    }
}

impl RouteStop for RouteStep {
    fn kind(&self) -> StepKind {
        RouteStep::kind(self)
    }

    fn description(&self) -> &str {
        RouteStep::description(self)
    }

    fn location(&self) -> Option<&Location> {
        RouteStep::location(self)
    }

    fn distance(&self) -> Meters {
        RouteStep::distance(self)
    }

    fn travel_duration(&self) -> SignedDuration {
        RouteStep::travel_duration(self)
    }

    fn arrival(&self) -> SignedDuration {
        RouteStep::arrival(self)
    }

    fn total_duration(&self) -> SignedDuration {
        RouteStep::total_duration(self)
    }

    fn shipment_ids(&self) -> Vec<u64> {
        self.id().into_iter().collect()
    }
}

impl RouteStop for DisplayStep {
    fn kind(&self) -> StepKind {
        self.as_stop().kind()
    }

    fn description(&self) -> &str {
        self.as_stop().description()
    }

    fn location(&self) -> Option<&Location> {
        self.as_stop().location()
    }

    fn distance(&self) -> Meters {
        self.as_stop().distance()
    }

    fn travel_duration(&self) -> SignedDuration {
        self.as_stop().travel_duration()
    }

    fn arrival(&self) -> SignedDuration {
        self.as_stop().arrival()
    }

    fn total_duration(&self) -> SignedDuration {
        self.as_stop().total_duration()
    }

    fn shipment_ids(&self) -> Vec<u64> {
        self.as_stop().shipment_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::aggregate::aggregate_steps,
        test_utils::{self, TestStep, delivery},
    };

    #[test]
    fn test_point_feature() {
        let unit = DisplayStep::from(delivery(0));
        let feature = unit.to_point_feature(2, None).unwrap();

        assert_eq!(
            feature.geometry,
            Some(Geometry::new(Value::Point(vec![12.0, 51.0])))
        );
        assert_eq!(feature.property("type"), Some(&json!("delivery")));
        assert_eq!(feature.property("index"), Some(&json!(2)));
        assert_eq!(
            feature.property("description"),
            Some(&json!("Shipment 1\ndelivery 0\nStop: 3\nDistance: 0 km"))
        );
    }

    #[test]
    fn test_point_feature_without_location() {
        let units = aggregate_steps(vec![
            test_utils::create_step(TestStep {
                kind: StepKind::Break,
                description: "Rest",
                ..TestStep::default()
            }),
            test_utils::create_step(TestStep {
                kind: StepKind::Break,
                description: "Rest",
                ..TestStep::default()
            }),
        ]);

        assert!(matches!(
            units[0].to_point_feature(0, None),
            Err(RouteError::MissingLocation)
        ));
    }

    #[test]
    fn test_aggregated_point_uses_located_member() {
        let units = aggregate_steps(vec![
            test_utils::create_step(TestStep {
                kind: StepKind::Pickup,
                id: Some(0),
                description: "Depot",
                ..TestStep::default()
            }),
            test_utils::create_step(TestStep {
                kind: StepKind::Pickup,
                id: Some(1),
                description: "Depot",
                location: Some([12.5, 51.5]),
                ..TestStep::default()
            }),
        ]);

        let feature = units[0].to_point_feature(0, None).unwrap();

        assert_eq!(
            feature.geometry,
            Some(Geometry::new(Value::Point(vec![12.5, 51.5])))
        );
        assert_eq!(
            feature.property("description"),
            Some(&json!("Shipment 2\nDepot\nStop: 1\nDistance: 0 km"))
        );
    }
}
