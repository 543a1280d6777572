use super::client::{ApiClient, FetchOptions};
use crate::models::{FeedbackRequest, FeedbackResponse, ForecastResponse, Prediction};

const PREDICT: &str = "/predict";
const HOURLY_FORECAST: &str = "/predict_hourly_forecast";
const AI_FEEDBACK: &str = "/get_ai_feedback";

impl ApiClient {
    /// Get the current usage prediction for an appliance
    pub async fn predict(&self, appliance: &str) -> Option<Prediction> {
        self.fetch_data(PREDICT, FetchOptions::get().param("appliance", appliance))
            .await
    }

    /// Get today's hourly forecast for an appliance
    pub async fn predict_hourly_forecast(&self, appliance: &str) -> Option<ForecastResponse> {
        self.fetch_data(
            HOURLY_FORECAST,
            FetchOptions::get().param("appliance", appliance),
        )
        .await
    }

    /// Ask for feedback on simulated sensor usage against the forecast
    pub async fn get_ai_feedback(&self, request: &FeedbackRequest) -> Option<FeedbackResponse> {
        let options = match FetchOptions::post_json(request) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to encode feedback request: {}", e);
                return None;
            }
        };
        self.fetch_data(AI_FEEDBACK, options).await
    }
}
