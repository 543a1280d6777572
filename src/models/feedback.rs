use serde::{Deserialize, Serialize};

/// Body of the feedback request: predicted vs simulated sensor usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub appliance: String,
    pub predicted_data: Vec<f64>,
    pub actual_sensor_data: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
