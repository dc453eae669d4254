//! GeminiBrain: completion provider with automatic function calling.

use async_trait::async_trait;
use brain_core::{
    BrainError, CompletionProvider, CompletionRequest, CompletionResult, ToolDescriptor,
};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::api_types::{
    Content, FunctionCall, FunctionResponse, GenerateContentRequest, GenerationConfig,
};
use crate::client::{ContentGenerator, GeminiClient};
use crate::config::GeminiConfig;
use crate::schema::request_tools;

/// A completion provider backed by the Gemini API.
///
/// When the request enables automatic tool execution, GeminiBrain answers
/// the model's function calls itself: it invokes the matching descriptor's
/// callable, sends the results back, and repeats until the model replies
/// with text or the round budget runs out.
pub struct GeminiBrain<G: ContentGenerator = GeminiClient> {
    generator: G,
    config: GeminiConfig,
}

impl GeminiBrain<GeminiClient> {
    /// Create a new GeminiBrain with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, BrainError> {
        let generator = GeminiClient::new(&config)?;
        Ok(Self::with_generator(config, generator))
    }

    /// Create a GeminiBrain from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(GeminiConfig::from_env()?)
    }
}

impl<G: ContentGenerator> GeminiBrain<G> {
    /// Create a GeminiBrain over a custom transport.
    pub fn with_generator(config: GeminiConfig, generator: G) -> Self {
        info!(
            "GeminiBrain initialized (api: {}, max tool calls: {})",
            config.api_url, config.max_tool_calls
        );
        Self { generator, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        if self.config.temperature.is_none() && self.config.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        })
    }

    /// Run one function call against the supplied tools.
    async fn invoke(&self, tools: &[ToolDescriptor], call: &FunctionCall) -> FunctionResponse {
        let response = match tools.iter().find(|tool| tool.name == call.name) {
            Some(tool) => {
                info!("Model called tool '{}'", call.name);
                match tool.call(call.args.clone()).await {
                    Ok(result) => json!({ "result": result }),
                    Err(e) => {
                        warn!("Tool '{}' failed: {}", call.name, e);
                        json!({ "error": e.to_string() })
                    }
                }
            }
            None => {
                warn!("Model called unknown tool: {}", call.name);
                json!({ "error": format!("Unknown tool: {}", call.name) })
            }
        };

        FunctionResponse {
            id: call.id.clone(),
            name: call.name.clone(),
            response,
        }
    }
}

#[async_trait]
impl<G: ContentGenerator> CompletionProvider for GeminiBrain<G> {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, BrainError> {
        let tools = request_tools(&request.tools)?;
        let generation_config = self.generation_config();
        let mut contents = vec![Content::user(request.content.as_str())];
        let mut rounds = 0usize;

        loop {
            let body = GenerateContentRequest {
                contents: contents.clone(),
                tools: tools.clone(),
                generation_config: generation_config.clone(),
            };

            let response = self.generator.generate(&request.model, &body).await?;

            if let Some(ref usage) = response.usage_metadata {
                debug!(
                    "Token usage - prompt: {}, completion: {}, total: {}",
                    usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
                );
            }

            let Some(content) = response.first_content() else {
                let reason = response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.clone())
                    .or_else(|| response.candidates.first().and_then(|c| c.finish_reason.clone()));
                warn!("No content in response (reason: {:?})", reason);
                return Ok(CompletionResult::empty());
            };

            let calls = content.function_calls();
            if calls.is_empty() || !request.auto_tool_execution {
                return Ok(CompletionResult {
                    text: content.text(),
                });
            }

            if rounds >= self.config.max_tool_calls {
                warn!(
                    "Tool call budget of {} rounds reached, returning last response",
                    self.config.max_tool_calls
                );
                return Ok(CompletionResult {
                    text: content.text(),
                });
            }
            rounds += 1;

            let mut responses = Vec::with_capacity(calls.len());
            for call in calls {
                responses.push(self.invoke(&request.tools, call).await);
            }

            let mut model_turn = content.clone();
            model_turn.role.get_or_insert_with(|| "model".to_string());
            contents.push(model_turn);
            contents.push(Content::function_responses(responses));
        }
    }

    fn name(&self) -> &str {
        "GeminiBrain"
    }
}
