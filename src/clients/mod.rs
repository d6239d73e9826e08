use async_trait::async_trait;
use thiserror::Error;

pub mod hf_chat;

/// Raised while building the chat client at startup, before any submission is
/// accepted.
#[derive(Debug, Error)]
pub enum GatewayInitError {
    #[error("chat gateway API token is missing or blank")]
    MissingToken,
    #[error("failed to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// A chat completion attempt that failed. Terminal for the current
/// submission, the customer may simply resubmit.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat completion API returned {status}")]
    Api { status: reqwest::StatusCode },
    #[error("chat completion response contained no choices")]
    EmptyCompletion,
}

/// Boundary to the remote model: one prompt in, one response text out.
/// Handlers only see this trait, so tests can swap in a canned
/// implementation.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;
}
