use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Capacity given to every vehicle when capacities are enabled.
pub const DEFAULT_MAX_CAPACITY: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleProfile {
    Car,
    Bike,
}

impl Display for VehicleProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleProfile::Car => "car",
                VehicleProfile::Bike => "bike",
            }
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct Vehicle {
    pub id: u64,
    pub profile: VehicleProfile,
    pub max_tasks: Option<usize>,
    pub speed_factor: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "ShipmentStop")]
pub struct ShipmentStop {
    pub address_name: String,
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
    pub service_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Shipment")]
pub struct Shipment {
    pub id: u64,
    pub pickup: ShipmentStop,
    pub delivery: ShipmentStop,
    #[serde(default = "default_amount")]
    pub amount: i64,
}

fn default_amount() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Depot")]
pub struct Depot {
    pub name: Option<String>,
    pub address_name: Option<String>,
    pub coordinates: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "ScenarioOptions")]
pub struct ScenarioOptions {
    pub depot: Option<Depot>,
    pub vehicle_capacity: Option<u32>,
    #[serde(default = "default_auto_assign_tasks")]
    pub auto_assign_tasks: bool,
}

fn default_auto_assign_tasks() -> bool {
    true
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        ScenarioOptions {
            depot: None,
            vehicle_capacity: None,
            auto_assign_tasks: default_auto_assign_tasks(),
        }
    }
}

/// Vehicles, shipments and options of a planning scenario.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Scenario")]
pub struct Scenario {
    pub vehicles: Vec<Vehicle>,
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub options: ScenarioOptions,
}

impl Scenario {
    pub fn build_request(&self) -> VroomRequest {
        generate_request(&self.vehicles, &self.shipments, &self.options)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VroomShipmentStep {
    pub id: u64,
    pub description: String,
    pub location: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
}

impl VroomShipmentStep {
    fn new(id: u64, stop: &ShipmentStop) -> Self {
        VroomShipmentStep {
            id,
            description: stop.address_name.clone(),
            location: stop.coordinates,
            service: stop.service_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VroomShipment {
    pub pickup: VroomShipmentStep,
    pub delivery: VroomShipmentStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VroomVehicle {
    pub id: u64,
    pub profile: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VroomOptions {
    /// Ask the solver for route geometries.
    pub g: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VroomRequest {
    pub shipments: Vec<VroomShipment>,
    pub vehicles: Vec<VroomVehicle>,
    pub options: VroomOptions,
}

/// Builds the solver request for a scenario.
///
/// With `auto_assign_tasks`, tasks are spread evenly: every vehicle may
/// serve at most `ceil(2 * shipments / vehicles)` pickups and deliveries.
/// Shipment amounts are only sent when vehicles have a capacity, the solver
/// rejects them otherwise.
pub fn generate_request(
    vehicles: &[Vehicle],
    shipments: &[Shipment],
    options: &ScenarioOptions,
) -> VroomRequest {
    let with_capacity = options.vehicle_capacity.is_some_and(|capacity| capacity > 0);

    let shipments = shipments
        .iter()
        .map(|shipment| VroomShipment {
            pickup: VroomShipmentStep::new(shipment.id, &shipment.pickup),
            delivery: VroomShipmentStep::new(shipment.id, &shipment.delivery),
            amount: with_capacity.then(|| vec![shipment.amount]),
        })
        .collect::<Vec<_>>();

    let assigned_max_tasks = (options.auto_assign_tasks && !vehicles.is_empty())
        .then(|| (shipments.len() * 2).div_ceil(vehicles.len()));

    let start = options
        .depot
        .as_ref()
        .and_then(|depot| depot.coordinates);

    let vehicles = vehicles
        .iter()
        .map(|vehicle| VroomVehicle {
            id: vehicle.id,
            profile: vehicle.profile.to_string(),
            description: format!("{} {}", vehicle.profile, vehicle.id),
            start,
            capacity: with_capacity.then(|| vec![DEFAULT_MAX_CAPACITY]),
            max_tasks: assigned_max_tasks.or(vehicle.max_tasks),
            speed_factor: vehicle.speed_factor,
        })
        .collect();

    VroomRequest {
        shipments,
        vehicles,
        options: VroomOptions { g: true },
    }
}
