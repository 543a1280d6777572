use leptos::*;

use crate::state::use_dashboard;

use super::device_selector::DeviceSelector;
use super::efficiency_card::EfficiencyCard;
use super::forecast_chart::ForecastChart;
use super::prediction_card::PredictionCard;
use super::sensor_card::SensorCard;
use super::suggestion_card::SuggestionCard;

/// Dashboard page: initial load, prediction polling and the card grid
#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();
    let state = dashboard.state;

    // Populate the initially selected device
    dashboard.select_device(state.with_untracked(|s| s.device.clone()));

    // Refresh the live prediction for whichever device is selected when the timer fires
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let polling = dashboard.clone();
        let prediction_interval =
            Interval::new(dashboard.config.prediction_refresh_ms, move || {
                polling.update_live_prediction(polling.selected_device_id());
            });

        on_cleanup(move || drop(prediction_interval));
    }

    let subtitle = create_memo(move |_| state.with(|s| s.subtitle.clone()));
    let appliance = create_memo(move |_| state.with(|s| s.appliance_name.clone()));
    let prediction = create_memo(move |_| state.with(|s| s.prediction_text.clone()));
    let last_updated = create_memo(move |_| state.with(|s| s.last_updated.clone()));
    let suggestion = create_memo(move |_| state.with(|s| s.suggestion.clone()));
    let sensor = create_memo(move |_| state.with(|s| s.sensor));
    let efficiency = create_memo(move |_| state.with(|s| s.efficiency));
    let chart = create_memo(move |_| state.with(|s| s.chart.clone()));
    let selected = create_memo(move |_| state.with(|s| s.device.id.clone()));

    let on_select = {
        let dashboard = dashboard.clone();
        Callback::new(move |device| dashboard.select_device(device))
    };
    let on_connect = Callback::new(move |_: ()| dashboard.connect_sensor());

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <p id="main-header-subtitle" class="subtitle">{subtitle}</p>
                <DeviceSelector selected=selected on_select=on_select />
            </header>
            <div class="dashboard-grid">
                <PredictionCard
                    appliance=appliance
                    value=prediction
                    last_updated=last_updated
                />
                <SuggestionCard text=suggestion />
                <SensorCard status=sensor on_connect=on_connect />
                <EfficiencyCard efficiency=efficiency />
                <ForecastChart chart=chart />
            </div>
        </div>
    }
}
