use leptos::*;

use crate::models::Device;

#[component]
pub fn DeviceSelector(
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<Device>,
) -> impl IntoView {
    let on_change = move |event: ev::Event| {
        let id = event_target_value(&event);
        match Device::find(&id) {
            Some(device) => on_select.call(device),
            None => log::warn!("Unknown device selected: {}", id),
        }
    };

    view! {
        <label class="device-selector">
            <span class="selector-label">"Appliance"</span>
            <select id="device-selector" on:change=on_change>
                {Device::catalog()
                    .into_iter()
                    .map(|device| {
                        let id = device.id.clone();
                        view! {
                            <option
                                value=device.id
                                selected=move || selected.get() == id
                            >
                                {device.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
