use leptos::*;

use crate::state::sensor::SensorStatus;

#[component]
pub fn SensorCard(
    #[prop(into)] status: Signal<SensorStatus>,
    on_connect: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Smart Sensor"</h3>
            <div class="status-item">
                <span class="status-label">"Status: "</span>
                <span
                    id="sensor-status"
                    class=move || status.get().css_class()
                >
                    {move || status.get().as_str()}
                </span>
            </div>
            <button
                id="connect-sensor-btn"
                class="connect-button"
                disabled=move || status.get().is_connected()
                on:click=move |_| on_connect.call(())
            >
                {move || status.get().button_label()}
            </button>
        </div>
    }
}
