//! Dashboard configuration, created once at startup and passed through the
//! dashboard context.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Backend origin baked in at build time (`BACKEND_URL=... trunk build`)
pub const DEFAULT_BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5001",
};

/// Live prediction refresh period: 15 minutes
pub const PREDICTION_REFRESH_MS: u32 = 15 * 60 * 1000;

/// Total width of the relative sensor noise band (0.4 = +/-20%)
pub const SENSOR_NOISE_BAND: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub backend_url: String,
    pub prediction_refresh_ms: u32,
    pub noise_band: f64,
}

impl DashboardConfig {
    /// Build the configuration, letting `window.ENV.API_URL` override the
    /// compiled-in backend origin
    pub fn load() -> Self {
        let backend_url = runtime_api_url().unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::with_backend_url(&backend_url)
    }

    pub fn with_backend_url(url: &str) -> Self {
        Self {
            backend_url: normalize_url(url),
            prediction_refresh_ms: PREDICTION_REFRESH_MS,
            noise_band: SENSOR_NOISE_BAND,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::with_backend_url(DEFAULT_BACKEND_URL)
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get API URL from window.ENV if the host page defines one
fn runtime_api_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        let api_url = js_sys::Reflect::get(&env, &JsValue::from_str("API_URL")).ok()?;
        return api_url.as_string().filter(|url| !url.trim().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();

        assert!(!config.backend_url.ends_with('/'));
        assert_eq!(config.prediction_refresh_ms, 900_000);
        assert_eq!(config.noise_band, 0.4);
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = DashboardConfig::with_backend_url(" http://example.com:5001// ");
        assert_eq!(config.backend_url, "http://example.com:5001");
    }

    #[test]
    fn test_load_without_window_uses_default() {
        let config = DashboardConfig::load();
        assert_eq!(config.backend_url, normalize_url(DEFAULT_BACKEND_URL));
    }
}
