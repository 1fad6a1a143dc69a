use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the solver response
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// JSON schema of the scenario input
    ScenarioSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    let (schema, out) = match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            (vroom_client::schema::generate_response_schema()?, out)
        }
        GenerateSubcommands::ScenarioSchema { out } => {
            (vroom_client::schema::generate_scenario_schema()?, out)
        }
    };

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, schema)?;

    Ok(())
}
