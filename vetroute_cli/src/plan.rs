use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::civil::Date;
use tracing::info;
use vetroute_planner::{
    config::PlannerConfig,
    planner::{
        itinerary::itinerary,
        planning_session::{DayPlan, PlanningSession},
    },
    problem::van_capacity::VanCapacity,
};
use vetroute_providers::route_optimization_client::RouteOptimizationClient;

use crate::{file_utils::read_request, parsers};

#[derive(Args)]
pub struct PlanArgs {
    /// Planning request as JSON
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Overrides the date of the request (YYYY-MM-DD, today, tomorrow)
    #[arg(short, long, value_parser = parsers::parse_date)]
    date: Option<Date>,

    /// Overrides the van capacity class of the request
    #[arg(long)]
    van: Option<VanCapacity>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let mut request = read_request(&args.input)?;
    if let Some(date) = args.date {
        request.date = date;
    }
    if let Some(van) = args.van {
        request.van_capacity = van;
    }

    let config = PlannerConfig::from_env()?;
    let optimizer = RouteOptimizationClient::from_env()?;
    if !optimizer.is_enabled() {
        info!("No optimization endpoint configured, ordering by zone weight");
    }

    let mut session = PlanningSession::new(&optimizer, &config);
    let plan = session.plan(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan, &config);
    }

    session.mark_rendered()?;

    Ok(())
}

fn print_plan(plan: &DayPlan, config: &PlannerConfig) {
    println!("Pickups for {} ({} van)", plan.date, plan.van_capacity);

    let mut stops = Table::new();
    stops.load_preset(UTF8_FULL).set_header(vec![
        "#", "Stop", "Pet", "Zone", "Zone weight", "Pet kg", "Cage", "Time", "Leg km",
    ]);

    for entry in itinerary(&plan.route, &plan.zone_weights, config) {
        stops.add_row(vec![
            entry.position.to_string(),
            entry.stop_id.to_string(),
            entry.pet_name.unwrap_or_default(),
            entry.zone_name.unwrap_or_else(|| "-".to_string()),
            format!("{:.2}", entry.zone_weight),
            format!("{:.1}", entry.pet_weight.value()),
            entry.cage_class.to_string(),
            entry.scheduled_time.unwrap_or_default(),
            format!("{:.1}", entry.leg_distance_meters / 1000.0),
        ]);
    }
    println!("{stops}");

    let statistics = &plan.statistics;
    let mut load = Table::new();
    load.load_preset(UTF8_FULL).set_header(vec!["Load", "Value"]);
    load.add_row(vec!["Stops".to_string(), statistics.stop_count.to_string()]);
    load.add_row(vec![
        "Cages (S/M/L)".to_string(),
        format!(
            "{}/{}/{} of {}",
            statistics.cage_allocation.small,
            statistics.cage_allocation.medium,
            statistics.cage_allocation.large,
            plan.capacity.capacity
        ),
    ]);
    load.add_row(vec![
        "Pets".to_string(),
        statistics.total_pet_weight.to_string(),
    ]);
    load.add_row(vec![
        "Average pet".to_string(),
        statistics.average_pet_weight.to_string(),
    ]);
    load.add_row(vec![
        "Cages tare".to_string(),
        statistics.total_tare_weight.to_string(),
    ]);
    load.add_row(vec!["Total".to_string(), statistics.total_weight.to_string()]);
    load.add_row(vec![
        "Distance".to_string(),
        format!("{:.1} km", plan.route.total_distance_meters() / 1000.0),
    ]);
    println!("{load}");

    for notice in &plan.notices {
        println!("! {notice}");
    }
}
