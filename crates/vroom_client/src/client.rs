use tracing::debug;

use crate::{error::VroomError, request::VroomRequest, response::VroomResponse};

pub const VROOM_URL_ENV_VAR: &str = "VROOM_URL";
pub const DEFAULT_VROOM_URL: &str = "http://localhost:3000";

pub struct VroomClientParams {
    pub vroom_url: String,
}

impl VroomClientParams {
    /// Reads the solver endpoint from `VROOM_URL`, falling back to a solver
    /// on localhost.
    pub fn from_env() -> Self {
        Self {
            vroom_url: std::env::var(VROOM_URL_ENV_VAR)
                .unwrap_or_else(|_| String::from(DEFAULT_VROOM_URL)),
        }
    }
}

impl Default for VroomClientParams {
    fn default() -> Self {
        Self::from_env()
    }
}

pub struct VroomClient {
    params: VroomClientParams,
    client: reqwest::Client,
}

impl VroomClient {
    pub fn new(params: VroomClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.params.vroom_url
    }

    /// Posts `request` to the solver and parses its solution.
    ///
    /// The solver reports invalid input with an HTTP error status, which is
    /// returned as [`VroomError::Api`] together with the response body.
    pub async fn solve(&self, request: &VroomRequest) -> Result<VroomResponse, VroomError> {
        debug!(
            url = %self.params.vroom_url,
            shipments = request.shipments.len(),
            vehicles = request.vehicles.len(),
            "VroomClient: Posting request"
        );

        let response = self
            .client
            .post(&self.params.vroom_url)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(VroomError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        let solution: VroomResponse = serde_json::from_slice(&bytes)?;

        debug!(
            routes = solution.routes.len(),
            unassigned = solution.unassigned.len(),
            "VroomClient: Received solution"
        );

        Ok(solution)
    }
}
