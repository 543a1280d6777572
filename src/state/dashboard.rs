//! Everything the dashboard page renders, and the transitions applied to it
//! when responses arrive or the user acts.

use crate::models::{Device, FeedbackRequest, FeedbackResponse, ForecastResponse, Prediction};

use super::chart::ChartState;
use super::sensor::{simulate_readings, Efficiency, NoiseSource, SensorError, SensorStatus};

pub const PREDICTION_PLACEHOLDER: &str = "--";
pub const PREDICTION_ERROR: &str = "Error";
pub const SUGGESTION_LOADING: &str = "Loading suggestion...";
pub const FORECAST_FALLBACK: &str = "Could not load forecast for this device.";
pub const ANALYZING: &str = "Analyzing your performance...";

/// Independent fetch channels, each with its own generation counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Prediction,
    Forecast,
    Feedback,
}

/// Identifies one in-flight request; only the newest per channel is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    channel: Channel,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Generations {
    prediction: u64,
    forecast: u64,
    feedback: u64,
}

impl Generations {
    fn slot(&mut self, channel: Channel) -> &mut u64 {
        match channel {
            Channel::Prediction => &mut self.prediction,
            Channel::Forecast => &mut self.forecast,
            Channel::Feedback => &mut self.feedback,
        }
    }

    fn next(&mut self, channel: Channel) -> RequestToken {
        let slot = self.slot(channel);
        *slot += 1;
        RequestToken {
            channel,
            generation: *slot,
        }
    }

    fn is_current(&mut self, token: RequestToken) -> bool {
        *self.slot(token.channel) == token.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub device: Device,
    pub appliance_name: String,
    pub subtitle: String,
    pub prediction_text: String,
    pub last_updated: Option<String>,
    pub suggestion: String,
    pub sensor: SensorStatus,
    /// `None` keeps the efficiency widget hidden
    pub efficiency: Option<Efficiency>,
    pub chart: ChartState,
    generations: Generations,
}

impl DashboardState {
    pub fn new(device: Device, current_hour: u32) -> Self {
        Self {
            appliance_name: device.label.clone(),
            subtitle: device.subtitle(),
            device,
            prediction_text: PREDICTION_PLACEHOLDER.to_string(),
            last_updated: None,
            suggestion: SUGGESTION_LOADING.to_string(),
            sensor: SensorStatus::Disconnected,
            efficiency: None,
            chart: ChartState::new(current_hour),
            generations: Generations::default(),
        }
    }

    /// Start a request on `channel`, superseding any still in flight
    pub fn begin_request(&mut self, channel: Channel) -> RequestToken {
        self.generations.next(channel)
    }

    fn accept(&mut self, token: RequestToken) -> bool {
        let current = self.generations.is_current(token);
        if !current {
            log::debug!("Discarding stale {:?} response", token.channel);
        }
        current
    }

    /// Switch the selected device. Feedback still in flight for the previous
    /// device is discarded.
    pub fn select_device(&mut self, device: Device) {
        self.appliance_name = device.label.clone();
        self.subtitle = device.subtitle();
        self.device = device;
        self.generations.next(Channel::Feedback);
    }

    pub fn apply_prediction(
        &mut self,
        token: RequestToken,
        result: Option<Prediction>,
        updated_at: &str,
    ) {
        if !self.accept(token) {
            return;
        }
        match result {
            Some(prediction) => {
                self.prediction_text = prediction.display_value();
                self.last_updated = Some(format!("Last updated: {}", updated_at));
            }
            None => self.prediction_text = PREDICTION_ERROR.to_string(),
        }
    }

    pub fn apply_forecast(
        &mut self,
        token: RequestToken,
        device_id: &str,
        result: Option<ForecastResponse>,
        current_hour: u32,
    ) {
        if !self.accept(token) {
            return;
        }

        let (forecast, suggestion, error) = match result {
            Some(response) => (response.forecast, response.suggestion, response.error),
            None => (None, None, None),
        };

        match forecast {
            Some(forecast) => {
                self.chart.show_forecast(device_id, forecast, current_hour);
                if let Some(suggestion) = non_empty(suggestion) {
                    self.suggestion = suggestion;
                }
            }
            None => {
                self.chart.clear();
                self.suggestion =
                    non_empty(error).unwrap_or_else(|| FORECAST_FALLBACK.to_string());
            }
        }
    }

    pub fn reset_sensor_widgets(&mut self) {
        self.sensor = SensorStatus::Disconnected;
        self.efficiency = None;
    }

    /// Simulate a sensor over the loaded forecast. Returns the feedback
    /// request to send and the token its response must carry.
    pub fn connect_sensor(
        &mut self,
        noise_band: f64,
        noise: &mut impl NoiseSource,
    ) -> Result<(FeedbackRequest, RequestToken), SensorError> {
        if self.sensor.is_connected() {
            return Err(SensorError::AlreadyConnected);
        }
        let predicted = self.chart.predicted_series().to_vec();
        if predicted.is_empty() {
            return Err(SensorError::NoForecast);
        }

        self.sensor = SensorStatus::Connected;

        let readings = simulate_readings(&predicted, noise_band, noise);
        log::debug!("Simulated {} sensor readings", readings.len());
        self.chart.overlay_actual(readings.clone());

        if let Some(efficiency) = Efficiency::compute(&predicted, &readings) {
            self.efficiency = Some(efficiency);
        }

        self.suggestion = ANALYZING.to_string();
        let token = self.begin_request(Channel::Feedback);
        let request = FeedbackRequest {
            appliance: self.device.id.clone(),
            predicted_data: predicted,
            actual_sensor_data: readings,
        };
        Ok((request, token))
    }

    pub fn apply_feedback(&mut self, token: RequestToken, result: Option<FeedbackResponse>) {
        if !self.accept(token) {
            return;
        }
        if let Some(suggestion) = non_empty(result.and_then(|r| r.suggestion)) {
            self.suggestion = suggestion;
        }
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
