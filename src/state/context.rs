use chrono::Timelike;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::models::Device;

use super::dashboard::{Channel, DashboardState};
use super::sensor::RandomNoise;

/// Dependencies and state shared by every dashboard component
#[derive(Clone)]
pub struct DashboardContext {
    pub config: DashboardConfig,
    pub client: ApiClient,
    pub state: RwSignal<DashboardState>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig) -> Self {
        let client = ApiClient::new(&config);
        let state = create_rw_signal(DashboardState::new(Device::initial(), current_hour()));
        Self {
            config,
            client,
            state,
        }
    }

    /// Device selector change: refresh labels, prediction and forecast, and
    /// discard the previous device's sensor simulation
    pub fn select_device(&self, device: Device) {
        log::info!("Updating dashboard for: {}", device.id);

        let device_id = device.id.clone();
        self.state.update(|s| s.select_device(device));
        self.update_live_prediction(device_id.clone());
        self.update_forecast_chart(device_id);
        self.reset_sensor_widgets();
    }

    /// Id of the device selected right now
    pub fn selected_device_id(&self) -> String {
        self.state.with_untracked(|s| s.device.id.clone())
    }

    pub fn update_live_prediction(&self, device_id: String) {
        let Some(token) = self
            .state
            .try_update_untracked(|s| s.begin_request(Channel::Prediction))
        else {
            return;
        };
        let client = self.client.clone();
        let state = self.state;

        spawn_local(async move {
            let result = client.predict(&device_id).await;
            let updated_at = chrono::Local::now().format("%H:%M:%S").to_string();
            state.update(|s| s.apply_prediction(token, result, &updated_at));
        });
    }

    pub fn update_forecast_chart(&self, device_id: String) {
        let Some(token) = self
            .state
            .try_update_untracked(|s| s.begin_request(Channel::Forecast))
        else {
            return;
        };
        let client = self.client.clone();
        let state = self.state;

        spawn_local(async move {
            let result = client.predict_hourly_forecast(&device_id).await;
            state.update(|s| s.apply_forecast(token, &device_id, result, current_hour()));
        });
    }

    pub fn reset_sensor_widgets(&self) {
        self.state.update(|s| s.reset_sensor_widgets());
    }

    /// Connect-sensor button
    pub fn connect_sensor(&self) {
        let noise_band = self.config.noise_band;
        let mut noise = RandomNoise::from_clock();

        let Some(outcome) = self
            .state
            .try_update(|s| s.connect_sensor(noise_band, &mut noise))
        else {
            return;
        };

        let (request, token) = match outcome {
            Ok(pending) => pending,
            Err(e) if e.is_user_facing() => {
                alert(&e.to_string());
                return;
            }
            Err(e) => {
                log::debug!("{}", e);
                return;
            }
        };

        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.get_ai_feedback(&request).await;
            state.update(|s| s.apply_feedback(token, result));
        });
    }
}

/// Local hour of day, where the current-time line is drawn
pub fn current_hour() -> u32 {
    chrono::Local::now().hour()
}

/// Blocking browser alert
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    } else {
        log::warn!("{}", message);
    }
}

/// Provide the dashboard context to the application.
/// Call this once at the root of the app.
pub fn provide_dashboard_context(config: DashboardConfig) -> DashboardContext {
    let context = DashboardContext::new(config);
    provide_context(context.clone());
    context
}

/// Hook to access the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
        .expect("DashboardContext must be provided by a parent component")
}
