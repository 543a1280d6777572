use leptos::*;
use leptos_router::*;

/// Layout component with header bar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Energy Forecast"</h1>
                <div class="navbar-actions">
                    <CurrentTime />
                </div>
            </div>
        </nav>
    }
}

/// Current time display that updates every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(get_current_time());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || {
            set_time.set(get_current_time());
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <span class="last-update">
            {move || time.get()}
        </span>
    }
}

fn get_current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
