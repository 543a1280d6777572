use leptos::*;

#[component]
pub fn PredictionCard(
    #[prop(into)] appliance: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] last_updated: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Live Prediction"</h3>
            <div id="prediction-appliance" class="subtitle">{appliance}</div>
            <div class="energy-value">
                <span id="prediction-value">{value}</span>
                <span class="unit">" kW"</span>
            </div>
            <div id="last-updated" class="last-update">
                {move || last_updated.get().unwrap_or_default()}
            </div>
        </div>
    }
}
