use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::state::provide_dashboard_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // One dashboard context for the page's lifetime
    provide_dashboard_context(DashboardConfig::load());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                </Route>
            </Routes>
        </Router>
    }
}
