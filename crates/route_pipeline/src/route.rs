use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use jiff::{SignedDuration, Zoned};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use tracing::{instrument, warn};

use crate::{
    display::{display_step::DisplayStep, route_stop::RouteStop},
    error::RouteError,
    pipeline::{aggregate::aggregate_steps, legs::reorder_legs},
    polyline::{self, DEFAULT_PRECISION},
    step::{
        meters::Meters,
        route_step::{RouteStep, seconds},
        step_kind::StepKind,
        violation::Violation,
    },
};

/// Which line to draw for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// The street geometry computed by the solver.
    #[default]
    Encoded,
    /// Straight segments between the located stops.
    Direct,
}

#[derive(Debug, Clone, Default)]
pub struct PointOptions {
    /// Drop pickup points, e.g. when every pickup happens at the depot.
    pub hide_pickups: bool,
    /// Start of the route, used to print arrival times.
    pub departure: Option<Zoned>,
}

fn deserialize_steps<'de, D>(deserializer: D) -> Result<Vec<DisplayStep>, D::Error>
where
    D: Deserializer<'de>,
{
    let steps = Vec::<RouteStep>::deserialize(deserializer)?;
    Ok(steps.into_iter().map(DisplayStep::from).collect())
}

/// A vehicle route as returned by the solver.
///
/// The steps are raw until [`Route::optimize`] runs, after which they are
/// the display-ready sequence.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Route {
    vehicle: u64,

    #[serde(default)]
    cost: u64,

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
    violations: Vec<Violation>,

    #[serde(default)]
    geometry: Option<String>,

    #[serde(default)]
    description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_steps")]
    #[schemars(with = "Vec<RouteStep>")]
    steps: Vec<DisplayStep>,

    #[serde(skip)]
    #[schemars(skip)]
    optimized: bool,
}

impl Route {
    pub fn new(vehicle: u64, steps: Vec<RouteStep>) -> Self {
        Route {
            vehicle,
            cost: 0,
            setup: 0,
            service: 0,
            duration: 0,
            waiting_time: 0,
            priority: 0,
            distance: Meters::ZERO,
            violations: Vec::new(),
            geometry: None,
            description: None,
            steps: steps.into_iter().map(DisplayStep::from).collect(),
            optimized: false,
        }
    }

    pub fn with_geometry(mut self, encoded: impl Into<String>) -> Self {
        self.geometry = Some(encoded.into());
        self
    }

    pub fn vehicle(&self) -> u64 {
        self.vehicle
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn geometry(&self) -> Option<&str> {
        self.geometry.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn steps(&self) -> &[DisplayStep] {
        &self.steps
    }

    pub fn is_optimized(&self) -> bool {
        self.optimized
    }

    /// Travel, setup, service and waiting time of the whole route.
    pub fn total_duration(&self) -> SignedDuration {
        seconds(self.setup)
            + seconds(self.service)
            + seconds(self.duration)
            + seconds(self.waiting_time)
    }

    /// Turns the raw solver steps into the display sequence: pickups are
    /// moved into the leg of their delivery, then adjacent steps at the
    /// same stop are aggregated.
    ///
    /// Runs once per route. Later calls leave the route untouched, since
    /// reload boundaries cannot be recovered from an aggregated sequence.
    #[instrument(skip_all, level = "debug", fields(vehicle = self.vehicle))]
    pub fn optimize(&mut self) {
        if self.optimized {
            warn!(vehicle = self.vehicle, "Route is already optimized, skipping");
            return;
        }

        let steps: Vec<RouteStep> = std::mem::take(&mut self.steps)
            .into_iter()
            .flat_map(DisplayStep::into_route_steps)
            .collect();

        self.steps = crate::timer_debug!("Optimized route steps", {
            aggregate_steps(reorder_legs(steps))
        });
        self.optimized = true;
    }

    /// One point per located unit, in route order.
    pub fn steps_as_points(&self, options: &PointOptions) -> Result<FeatureCollection, RouteError> {
        let features = self
            .steps
            .iter()
            .filter(|unit| unit.has_location())
            .enumerate()
            .filter(|(_, unit)| !(options.hide_pickups && unit.kind() == StepKind::Pickup))
            .map(|(index, unit)| unit.to_point_feature(index, options.departure.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }

    /// The route as a single line feature.
    pub fn geometry_as_line(&self, mode: LineMode) -> Result<FeatureCollection, RouteError> {
        let positions: Vec<Vec<f64>> = match mode {
            LineMode::Encoded => {
                let encoded = self.geometry.as_deref().ok_or(RouteError::MissingGeometry)?;
                polyline::decode(encoded, DEFAULT_PRECISION)?
                    .coords()
                    .map(|coord| vec![coord.x, coord.y])
                    .collect()
            }
            LineMode::Direct => self
                .steps
                .iter()
                .filter_map(|unit| unit.location())
                .map(|location| location.position())
                .collect(),
        };

        let feature = Feature {
            geometry: Some(Geometry::new(Value::LineString(positions))),
            properties: Some(JsonObject::new()),
            ..Default::default()
        };

        Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        })
    }
}
