use clap::Parser;

use crate::clients::hf_chat;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    /// Comma-separated origins allowed through CORS.
    #[clap(env, long)]
    pub origin_urls: String,

    #[clap(env, long)]
    pub huggingface_api_token: String,

    #[clap(env, long, default_value = hf_chat::DEFAULT_MODEL)]
    pub huggingface_model: String,

    #[clap(env, long, default_value = hf_chat::DEFAULT_BASE_URL)]
    pub huggingface_base_url: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
}
