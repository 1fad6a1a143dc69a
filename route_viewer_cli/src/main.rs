use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    generate::GenerateSubcommands,
    process::{ProcessArgs, TableArgs},
    solve::{RequestArgs, SolveArgs},
};

mod file_utils;
mod generate;
mod process;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize the routes of a solver response and write them as GeoJSON
    Process {
        #[command(flatten)]
        args: ProcessArgs,
    },
    /// Print the optimized steps of every route of a solver response
    Table {
        #[command(flatten)]
        args: TableArgs,
    },
    /// Print the solver request generated for a scenario
    Request {
        #[command(flatten)]
        args: RequestArgs,
    },
    /// Send a scenario to the solver and write the optimized routes as GeoJSON
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Process { args }) => process::run(args)?,
        Some(Commands::Table { args }) => process::run_table(args)?,
        Some(Commands::Request { args }) => solve::run_request(args)?,
        Some(Commands::Solve { args }) => solve::run(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
