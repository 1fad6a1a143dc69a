use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};
use vroom_client::{
    client::{VroomClient, VroomClientParams},
    request::Scenario,
};

use crate::{
    file_utils::{read_json, write_output},
    process::{RenderArgs, render_routes},
};

#[derive(Args)]
pub struct RequestArgs {
    /// Scenario file with vehicles, shipments and options
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Output file, stdout when omitted
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Scenario file with vehicles, shipments and options
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderArgs,
}

pub fn run_request(args: RequestArgs) -> Result<(), anyhow::Error> {
    let scenario: Scenario = read_json(&args.input)?;
    let request = scenario.build_request();

    write_output(args.out.as_ref(), &serde_json::to_string_pretty(&request)?)
}

pub async fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let scenario: Scenario = read_json(&args.input)?;
    let request = scenario.build_request();

    let client = VroomClient::new(VroomClientParams::from_env());
    info!(url = client.url(), "Solving scenario");

    let response = client.solve(&request).await?;
    if !response.unassigned.is_empty() {
        warn!(
            unassigned = response.unassigned.len(),
            "Some tasks could not be assigned"
        );
    }

    let mut routes = response.into_routes()?;
    for route in routes.iter_mut() {
        route.optimize();
    }

    let output = render_routes(&routes, &args.render)?;
    write_output(args.render.out.as_ref(), &output)
}
