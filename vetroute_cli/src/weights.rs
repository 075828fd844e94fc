use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use vetroute_planner::{config::PlannerConfig, weights::zone_weights::compute_zone_weights};

use crate::file_utils::read_request;

#[derive(Args)]
pub struct WeightsArgs {
    /// Planning request as JSON, only clinic and zones are read
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub fn run(args: WeightsArgs) -> anyhow::Result<()> {
    let request = read_request(&args.input)?;
    let config = PlannerConfig::from_env()?;

    let weights = compute_zone_weights(&request.zones, &request.clinic, &config.zone_weights);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Zone", "Weight"]);
    for (zone, weight) in weights.sorted_by_weight() {
        table.add_row(vec![zone.to_string(), format!("{weight:.2}")]);
    }
    println!("{table}");

    Ok(())
}
