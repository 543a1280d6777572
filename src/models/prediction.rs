use serde::{Deserialize, Serialize};

/// Current usage prediction for one appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "predicted_usage_kW")]
    pub predicted_usage_kw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_utc: Option<String>,
    /// Weather features the model was evaluated with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_inputs: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Prediction {
    /// Usage formatted for the prediction card
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.predicted_usage_kw)
    }
}
