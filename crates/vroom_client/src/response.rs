use route_pipeline::{
    route::Route,
    step::{meters::Meters, step_kind::StepKind, violation::Violation},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::VroomError;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VroomSummary {
    pub cost: u64,
    pub routes: usize,
    pub unassigned: usize,
    #[serde(default)]
    pub setup: u64,
    #[serde(default)]
    pub service: u64,
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub waiting_time: u64,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub distance: Meters,
    #[serde(default)]
    pub violations: Vec<Violation>,
}

/// A task the solver could not fit into any route.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VroomUnassigned {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<[f64; 2]>,
}

/// Solution returned by the solver. A non-zero `code` means the solver
/// failed and `error` tells why.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VroomResponse {
    pub code: i32,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub summary: Option<VroomSummary>,
    #[serde(default)]
    pub unassigned: Vec<VroomUnassigned>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl VroomResponse {
    /// The raw routes of a successful solution. Steps are not optimized yet.
    pub fn into_routes(self) -> Result<Vec<Route>, VroomError> {
        if self.code != 0 {
            return Err(VroomError::Solver {
                code: self.code,
                message: self.error.unwrap_or_default(),
            });
        }

        Ok(self.routes)
    }
}
