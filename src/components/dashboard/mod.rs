mod dashboard;
mod device_selector;
mod efficiency_card;
mod forecast_chart;
mod prediction_card;
mod sensor_card;
mod suggestion_card;

pub use dashboard::Dashboard;
