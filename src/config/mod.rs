mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Builds the immutable process configuration from environment variables.
///
/// `OPENROUTER_API_KEY` is optional here on purpose: the server starts
/// without it and every chat request fails fast until it is set.
pub fn load() -> Result<Config> {
    let mut llm = LlmConfig::default();
    let mut server = ServerConfig::default();

    llm.api_key = env::var("OPENROUTER_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    if let Ok(base_url) = env::var("OPENROUTER_BASE_URL") {
        llm.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Ok(model) = env::var("OPENROUTER_MODEL") {
        llm.model = model;
    }

    if let Ok(host) = env::var("HOST") {
        server.host = host;
    }
    if let Ok(port) = env::var("PORT") {
        server.port = port
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a number, got '{}'", port)))?;
    }

    debug!(
        port = server.port,
        model = %llm.model,
        api_key_set = llm.api_key.is_some(),
        "Configuration loaded from environment"
    );

    Ok(Config { llm, server })
}
