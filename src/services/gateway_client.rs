//! Model Gateway Client
//!
//! Thin client for the OpenAI-compatible chat-completions gateway that generates
//! itineraries. One request per generation, no retries: a failed call is reported
//! once to the caller.
//!
//! ## Configuration
//! - `LOVABLE_API_KEY`: bearer credential (required for generation)
//! - `AI_GATEWAY_URL`: chat-completions endpoint (optional)
//! - `AI_MODEL`: model identifier (optional)

use crate::services::itinerary_generation_service::GenerationError;
use crate::services::prompt_builder::ItineraryPrompt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use url::Url;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    api_key: Option<String>,
    pub endpoint: Url,
    pub model: String,
}

impl GatewayConfig {
    pub fn new(api_key: Option<String>, endpoint: Url, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint,
            model: model.into(),
        }
    }

    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("LOVABLE_API_KEY").ok();

        let endpoint =
            env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            GenerationError::Configuration(format!("AI_GATEWAY_URL is not a valid URL: {}", e))
        })?;

        let model = env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, endpoint, model))
    }

    pub fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key.as_deref().ok_or_else(|| {
            GenerationError::Configuration("LOVABLE_API_KEY is not configured".to_string())
        })
    }

    /// Key with everything but the first and last four characters hidden.
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() > 8 {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{}***{}", head, tail)
            } else {
                "***".to_string()
            }
        })
    }
}

/// Caller-facing meaning of the gateway's HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayStatus {
    Success,
    RateLimited,
    QuotaExhausted,
    Failed(u16),
}

impl GatewayStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => GatewayStatus::Success,
            429 => GatewayStatus::RateLimited,
            402 => GatewayStatus::QuotaExhausted,
            other => GatewayStatus::Failed(other),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: ToolChoice,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Serialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: NamedFunction,
}

#[derive(Debug, Serialize)]
pub struct NamedFunction {
    pub name: String,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompt: &ItineraryPrompt) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            tools: vec![ToolDefinition {
                kind: "function".to_string(),
                function: FunctionDefinition {
                    name: prompt.tool.name.to_string(),
                    description: prompt.tool.description.to_string(),
                    parameters: prompt.tool.parameters.clone(),
                },
            }],
            tool_choice: ToolChoice {
                kind: "function".to_string(),
                function: NamedFunction {
                    name: prompt.tool.name.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Choice {
    #[serde(default)]
    pub message: GatewayMessage,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GatewayMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToolCall {
    #[serde(default)]
    pub id: Option<String>,
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

impl ChatCompletionResponse {
    /// Message of the first choice; an empty message when the gateway sent none.
    pub fn into_message(self) -> GatewayMessage {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GatewayClient {
    http_client: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send the prompt and return the first message of the gateway's answer.
    ///
    /// Fails with `Configuration` before any network traffic when no key is set.
    pub async fn complete(&self, prompt: &ItineraryPrompt) -> Result<GatewayMessage, GenerationError> {
        let api_key = self.config.api_key()?;
        let request = ChatCompletionRequest::new(&self.config.model, prompt);

        let response = self
            .http_client
            .post(self.config.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        match GatewayStatus::from_code(status.as_u16()) {
            GatewayStatus::Success => {}
            GatewayStatus::RateLimited => return Err(GenerationError::RateLimited),
            GatewayStatus::QuotaExhausted => return Err(GenerationError::QuotaExhausted),
            GatewayStatus::Failed(code) => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                log::error!("AI gateway error: {} {}", code, error_text);
                return Err(GenerationError::Gateway { status: code });
            }
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidGatewayResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion.into_message())
    }
}
