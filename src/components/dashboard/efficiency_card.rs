use leptos::*;

use crate::state::sensor::Efficiency;

/// Rendered only once an efficiency has been computed
#[component]
pub fn EfficiencyCard(#[prop(into)] efficiency: Signal<Option<Efficiency>>) -> impl IntoView {
    move || {
        efficiency.get().map(|efficiency| {
            view! {
                <div id="efficiency-widget" class="card">
                    <h3>"Efficiency Score"</h3>
                    <div id="efficiency-value" class=efficiency.css_class()>
                        {efficiency.value_text()}
                    </div>
                    <p id="efficiency-text">{efficiency.message()}</p>
                </div>
            }
        })
    }
}
