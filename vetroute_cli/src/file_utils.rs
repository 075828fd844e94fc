use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use vetroute_planner::planner::planning_request::PlanningRequest;

pub fn read_request(path: &Path) -> anyhow::Result<PlanningRequest> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    PlanningRequest::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid planning request in {}", path.display()))
}
