//! Weather tool using the wttr.in API.

use std::time::Duration;

use async_trait::async_trait;
use brain_core::{Parameter, TypeTag};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

const WTTR_BASE_URL: &str = "https://wttr.in";

/// Default HTTP timeout for weather lookups.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 20;

/// Fetches weather for a city from wttr.in (no API key needed).
///
/// # Parameters
///
/// - `city`: City name, airport code, or coordinates. Published untyped
///   with a null default.
/// - `format` (optional): "short" (default) for a one-line summary, or
///   "full" for the multi-line forecast.
pub struct Weather {
    client: reqwest::Client,
    base_url: String,
}

impl Weather {
    /// Create a new weather tool.
    pub fn new() -> Self {
        Self::with_base_url(WTTR_BASE_URL)
    }

    /// Create a weather tool against a different wttr.in-compatible host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // wttr.in serves plain text only to curl-like agents
        let client = reqwest::Client::builder()
            .user_agent("curl/8.0.0")
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client for weather: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the lookup URL for a city and format.
    fn weather_url(&self, city: &str, format: &str) -> Result<Url, ToolError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ToolError::ExecutionFailed(format!("Invalid weather URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| ToolError::ExecutionFailed("Weather URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(city);

        match format {
            "full" => url.set_query(Some("T")),
            _ => {
                url.query_pairs_mut().append_pair("format", "%c %C %t");
            }
        }

        Ok(url)
    }

    async fn fetch_weather(&self, city: &str, format: &str) -> Result<String, ToolError> {
        let url = self.weather_url(city, format)?;
        debug!("Fetching weather from: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "Weather API returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;

        if body.contains("Unknown location") || body.contains("Sorry") {
            return Err(ToolError::ExecutionFailed(format!(
                "Location not found: {}",
                city
            )));
        }

        Ok(body.trim().to_string())
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for Weather {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Fetches the current weather and forecast for a city. \
         Supports city names, airport codes, and coordinates."
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::untyped("city", Some(Value::Null))
                .with_description("City name, airport code, or coordinates"),
            Parameter::optional("format", TypeTag::Text, Value::String("short".into()))
                .with_description("\"short\" for a one-line summary, \"full\" for a forecast"),
        ]
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let city = args.get_string("city")?;
        let format = args
            .get_string_opt("format")
            .unwrap_or_else(|| "short".to_string());

        debug!("Getting weather for '{}' (format: {})", city, format);

        let weather = self.fetch_weather(&city, &format).await.map_err(|e| {
            warn!("Weather fetch failed: {}", e);
            e
        })?;

        if format == "full" {
            Ok(ToolOutput::success(weather))
        } else {
            Ok(ToolOutput::success(format!("Weather in {}: {}", city, weather)))
        }
    }
}
