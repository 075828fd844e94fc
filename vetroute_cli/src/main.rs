use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, plan::PlanArgs, weights::WeightsArgs};

mod file_utils;
mod generate;
mod parsers;
mod plan;
mod weights;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Orders a day of pickups and prints the itinerary
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Prints the routing weight of every zone
    #[command(visible_alias = "w")]
    Weights {
        #[command(flatten)]
        args: WeightsArgs,
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
        .init();

    match cli.command {
        Commands::Plan { args } => plan::run(args).await?,
        Commands::Weights { args } => weights::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
