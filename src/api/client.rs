use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::DashboardConfig;

/// API error types. These never leave the client: `fetch_data` turns every
/// one of them into `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Request options for `fetch_data`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    /// Unset means GET
    pub method: Option<Method>,
    /// Query parameters, only sent for GET requests
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a JSON body
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body =
            serde_json::to_value(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(Self {
            method: Some(Method::Post),
            body: Some(body),
            ..Self::default()
        }
        .header("Content-Type", "application/json"))
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> Method {
        self.method.unwrap_or_default()
    }

    /// Parameters that end up in the query string
    pub fn query_params(&self) -> &[(String, String)] {
        match self.method() {
            Method::Get => &self.params,
            Method::Post => &[],
        }
    }
}

/// API client for the prediction backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.backend_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint, without query string
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Issue a request and parse its JSON body. Any failure is logged and
    /// reported as `None`.
    pub async fn fetch_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: FetchOptions,
    ) -> Option<T> {
        let url = self.url(endpoint);
        let result = self.request(&url, &options).await;
        into_option(&url, result)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<T, ApiError> {
        let mut builder = match options.method() {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        };

        let params = options.query_params();
        if !params.is_empty() {
            builder = builder.query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        builder = with_headers(builder, &options.headers);

        let response = match &options.body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };

        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if let Some(err) = status_error(response.status(), &response.status_text()) {
            return Err(err);
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

fn with_headers(builder: RequestBuilder, headers: &[(String, String)]) -> RequestBuilder {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

/// Error for any status outside 2xx
pub(crate) fn status_error(status: u16, status_text: &str) -> Option<ApiError> {
    if (200..300).contains(&status) {
        return None;
    }
    let message = if status_text.is_empty() {
        "Unknown error".to_string()
    } else {
        status_text.to_string()
    };
    Some(ApiError::Http { status, message })
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

pub(crate) fn into_option<T>(url: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Failed to fetch from {}: {}", url, e);
            None
        }
    }
}
