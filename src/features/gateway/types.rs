use serde::{Deserialize, Serialize};

/// Trip parameters as posted by the client. Values are rendered into the
/// prompt exactly as received.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub destination: String,
    pub date: String,
    pub budget: serde_json::Number,
    pub num_of_adults: i64,
    pub num_of_children: i64,
}

#[derive(Debug, Deserialize)]
pub struct ImageInstruction {
    pub instruction: String,
}
