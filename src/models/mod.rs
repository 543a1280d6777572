pub mod device;
pub mod feedback;
pub mod forecast;
pub mod prediction;

pub use device::Device;
pub use feedback::{FeedbackRequest, FeedbackResponse};
pub use forecast::{ForecastResponse, HourlyForecast};
pub use prediction::Prediction;
