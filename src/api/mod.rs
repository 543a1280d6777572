pub mod client;
pub mod prediction;

pub use client::{ApiClient, ApiError, FetchOptions, Method};
