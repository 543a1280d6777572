use leptos::*;

#[component]
pub fn SuggestionCard(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Energy Tip"</h3>
            <p id="suggestion-text" class="suggestion-text">{text}</p>
        </div>
    }
}
