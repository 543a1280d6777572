pub mod chart;
pub mod context;
pub mod dashboard;
pub mod sensor;

pub use chart::ChartState;
pub use context::{provide_dashboard_context, use_dashboard, DashboardContext};
pub use dashboard::DashboardState;
