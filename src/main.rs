mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{bot::start, config::Config, error::AppError, scheduler::keep_alive};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let state = startup::setup_bot_state(&config).await;

    // Keep-alive web server for hosting platforms that probe the process over HTTP
    if let Some(port) = config.port {
        let listener = startup::bind_keep_alive_server(port).await?;
        tokio::spawn(async move {
            if let Err(e) = startup::serve_keep_alive(listener).await {
                tracing::error!("Keep-alive server error: {}", e);
            }
        });
    }

    // Scheduler handle kept for the lifetime of the process
    let _keep_alive = match config.self_url.clone() {
        Some(self_url) => {
            let http_client = startup::setup_reqwest_client()?;
            Some(keep_alive::start_scheduler(http_client, self_url).await?)
        }
        None => None,
    };

    tracing::info!("Starting review bot");

    let client = start::init_bot(&config, state).await?;
    start::start_bot(client).await
}
