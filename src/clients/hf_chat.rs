use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::clients::{ChatGateway, GatewayError, GatewayInitError};

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-2-70b-chat-hf";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_COMPLETION_TOKENS: u32 = 512;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Client for the Hugging Face chat-completions endpoint (OpenAI-compatible
/// wire shape). One request per reservation submission, no retries.
pub struct HfChatClient {
    client: reqwest::Client,
    api_token: String,
    model: String,
    url: String,
}

impl HfChatClient {
    pub fn new(
        api_token: &str,
        model: &str,
        base_url: &str,
    ) -> Result<Self, GatewayInitError> {
        if api_token.trim().is_empty() {
            return Err(GatewayInitError::MissingToken);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_token: api_token.to_string(),
            model: model.to_string(),
            url: format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH),
        })
    }
}

#[async_trait]
impl ChatGateway for HfChatClient {
    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Chat completion API returned {} due to: {}", status, body);
            return Err(GatewayError::Api { status });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GatewayError::EmptyCompletion)
    }
}
