/// Body returned to uptime monitors.
pub const ALIVE_MESSAGE: &str = "Bot is alive!";

/// Answers liveness probes from the hosting platform.
pub async fn alive() -> &'static str {
    ALIVE_MESSAGE
}
