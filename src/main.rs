use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use crate::clients::hf_chat::HfChatClient;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::history_repo::ReservationHistoryRepo;

pub mod clients;
pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod prompt;
pub mod repositories;
pub mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let chat_client = HfChatClient::new(
        &config.huggingface_api_token,
        &config.huggingface_model,
        &config.huggingface_base_url,
    )
    .context("Error initialising the chat gateway, check the Hugging Face API token")?;

    let app_state = AppState {
        chat_gateway: Arc::new(chat_client),
        reservation_history: Arc::new(ReservationHistoryRepo::new()),
    };

    controller::serve(app_state, &config).await
}
