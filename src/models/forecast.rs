use serde::{Deserialize, Serialize};

/// Hour-indexed predictions; `hours[i]` labels `predictions[i]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub hours: Vec<String>,
    pub predictions: Vec<f64>,
}

impl HourlyForecast {
    pub fn is_aligned(&self) -> bool {
        self.hours.len() == self.predictions.len()
    }

    /// Drop unmatched trailing entries so both sequences have equal length
    pub fn into_aligned(mut self) -> Self {
        let len = self.hours.len().min(self.predictions.len());
        self.hours.truncate(len);
        self.predictions.truncate(len);
        self
    }
}

/// Hourly forecast endpoint payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub forecast: Option<HourlyForecast>,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_forecast_response_deserialization() {
        let json = r#"{
            "forecast": {"hours": ["12 AM", "01 AM"], "predictions": [0.5, 0.75]},
            "suggestion": "Run the dishwasher after 9 PM."
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();

        let forecast = response.forecast.unwrap();
        assert_eq!(forecast.hours, vec!["12 AM", "01 AM"]);
        assert_eq!(forecast.predictions, vec![0.5, 0.75]);
        assert!(forecast.is_aligned());
        assert_eq!(
            response.suggestion.as_deref(),
            Some("Run the dishwasher after 9 PM.")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn test_error_only_response() {
        let response: ForecastResponse = serde_json::from_str(r#"{"error": "no data"}"#).unwrap();

        assert!(response.forecast.is_none());
        assert_eq!(response.error.as_deref(), Some("no data"));
    }

    #[test]
    fn test_null_forecast_is_missing() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"forecast": null, "suggestion": null}"#).unwrap();

        assert!(response.forecast.is_none());
        assert!(response.suggestion.is_none());
    }

    #[test]
    fn test_into_aligned_truncates_longer_side() {
        let forecast = HourlyForecast {
            hours: vec!["00:00".into(), "01:00".into(), "02:00".into()],
            predictions: vec![1.0, 2.0],
        };
        assert!(!forecast.is_aligned());

        let aligned = forecast.into_aligned();
        assert_eq!(aligned.hours, vec!["00:00", "01:00"]);
        assert_eq!(aligned.predictions, vec![1.0, 2.0]);
    }
}
