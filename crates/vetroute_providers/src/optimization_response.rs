use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteResponse {
    /// Appointment ids in visiting order
    pub ordered_ids: Vec<String>,
}
