use std::time::Duration;
use tokio::net::TcpListener;

use crate::{
    config::Config,
    data::{review_channel::ReviewChannelRepository, review_session::ReviewSessionRepository},
    error::AppError,
    router,
    state::BotState,
};

/// Timeout applied to outbound keep-alive requests.
const HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Builds the HTTP client used for outbound requests.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with a request timeout
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
        .build()?;

    Ok(client)
}

/// Loads the review channel file and builds the bot state.
///
/// A missing or unreadable channel file results in an empty configuration rather than
/// an error, see `ReviewChannelRepository::load`.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `BotState` - State for the Discord event handler
pub async fn setup_bot_state(config: &Config) -> BotState {
    let review_channels = ReviewChannelRepository::load(&config.review_channel_file).await;
    let review_sessions = ReviewSessionRepository::new(config.review_prompt_timeout);

    BotState::new(
        review_channels,
        review_sessions,
        config.review_thank_you,
        config.test_guild_id,
    )
}

/// Binds the keep-alive web server to all interfaces on `port`.
pub async fn bind_keep_alive_server(port: u16) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Keep-alive server listening on {}", listener.local_addr()?);

    Ok(listener)
}

/// Serves the keep-alive routes until the process exits.
pub async fn serve_keep_alive(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, router::router()).await?;

    Ok(())
}
