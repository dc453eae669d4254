//! Configuration for GeminiBrain.

use std::env;
use std::fmt;

use brain_core::BrainError;

/// Default Gemini API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default number of automatic function-calling rounds per completion.
pub const DEFAULT_MAX_TOOL_CALLS: usize = 10;

/// Default HTTP timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for GeminiBrain.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Gemini API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens for the response.
    pub max_output_tokens: Option<u32>,

    /// Maximum automatic function-calling rounds before the last answer is returned as-is.
    pub max_tool_calls: usize,

    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            temperature: None,
            max_output_tokens: None,
            max_tool_calls: DEFAULT_MAX_TOOL_CALLS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("max_tool_calls", &self.max_tool_calls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a configuration for the given API key with defaults elsewhere.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GOOGLE_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_TEMPERATURE` - Temperature (default: provider default)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max output tokens (default: provider default)
    /// - `GEMINI_MAX_TOOL_CALLS` - Function-calling rounds (default: 10)
    /// - `GEMINI_TIMEOUT_SECS` - HTTP timeout (default: 60)
    pub fn from_env() -> Result<Self, BrainError> {
        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BrainError::Configuration("GOOGLE_API_KEY not set".to_string()))?;

        Self::from_env_with_key(api_key)
    }

    /// Like [`from_env`](Self::from_env), with the API key supplied by the caller.
    pub fn from_env_with_key(api_key: impl Into<String>) -> Result<Self, BrainError> {
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_tool_calls = env::var("GEMINI_MAX_TOOL_CALLS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOOL_CALLS);

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            api_key: api_key.into(),
            temperature,
            max_output_tokens,
            max_tool_calls,
            timeout_secs,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max output tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = Some(tokens);
        self
    }

    /// Set the function-calling round budget.
    pub fn max_tool_calls(mut self, calls: usize) -> Self {
        self.config.max_tool_calls = calls;
        self
    }

    /// Set the HTTP timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();

        assert_eq!(config.api_url, "https://generativelanguage.googleapis.com");
        assert!(config.api_key.is_empty());
        assert!(config.temperature.is_none());
        assert!(config.max_output_tokens.is_none());
        assert_eq!(config.max_tool_calls, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_builder_all_options() {
        let config = GeminiConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .temperature(0.5)
            .max_output_tokens(512)
            .max_tool_calls(3)
            .timeout_secs(5)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.max_output_tokens, Some(512));
        assert_eq!(config.max_tool_calls, 3);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_gemini_vars() {
            std::env::remove_var("GOOGLE_API_KEY");
            std::env::remove_var("GEMINI_API_URL");
            std::env::remove_var("GEMINI_TEMPERATURE");
            std::env::remove_var("GEMINI_MAX_OUTPUT_TOKENS");
            std::env::remove_var("GEMINI_MAX_TOOL_CALLS");
            std::env::remove_var("GEMINI_TIMEOUT_SECS");
        }

        // Scenario 1: Missing API key should error
        clear_all_gemini_vars();
        match GeminiConfig::from_env() {
            Err(BrainError::Configuration(msg)) => assert!(msg.contains("GOOGLE_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Scenario 2: Empty API key is treated as missing
        std::env::set_var("GOOGLE_API_KEY", "");
        assert!(GeminiConfig::from_env().is_err());

        // Scenario 3: Only API key set, defaults used
        clear_all_gemini_vars();
        std::env::set_var("GOOGLE_API_KEY", "test-env-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.max_tool_calls, DEFAULT_MAX_TOOL_CALLS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        // Scenario 4: All vars set
        std::env::set_var("GEMINI_API_URL", "http://localhost:9999");
        std::env::set_var("GEMINI_TEMPERATURE", "0.2");
        std::env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "2048");
        std::env::set_var("GEMINI_MAX_TOOL_CALLS", "4");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "15");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_output_tokens, Some(2048));
        assert_eq!(config.max_tool_calls, 4);
        assert_eq!(config.timeout_secs, 15);

        // Scenario 5: Unparsable numbers fall back to defaults
        std::env::set_var("GEMINI_MAX_TOOL_CALLS", "many");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "-1");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.max_tool_calls, DEFAULT_MAX_TOOL_CALLS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        clear_all_gemini_vars();
    }
}
