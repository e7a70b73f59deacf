use std::time::Duration;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_REVIEW_CHANNEL_FILE: &str = "review_channel.json";

pub struct Config {
    pub discord_token: String,

    /// Guild to register commands in; `None` registers them globally.
    pub test_guild_id: Option<u64>,

    /// Port for the keep-alive web server; `None` disables the server.
    pub port: Option<u16>,
    /// Public URL of this process pinged by the keep-alive job; `None` disables the job.
    pub self_url: Option<Url>,

    pub review_channel_file: String,
    pub review_prompt_timeout: Option<Duration>,
    pub review_thank_you: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            test_guild_id: optional_var("TEST_GUILD_ID", |v| v.parse::<u64>())?,
            port: optional_var("PORT", |v| v.parse::<u16>())?,
            self_url: optional_var("SELF_URL", Url::parse)?,
            review_channel_file: std::env::var("REVIEW_CHANNEL_FILE")
                .unwrap_or_else(|_| DEFAULT_REVIEW_CHANNEL_FILE.to_string()),
            review_prompt_timeout: optional_var("REVIEW_PROMPT_TIMEOUT_SECS", |v| {
                v.parse::<u64>()
            })?
            .map(Duration::from_secs),
            review_thank_you: optional_var("REVIEW_THANK_YOU", parse_bool)?.unwrap_or(false),
        })
    }
}

/// Reads an optional environment variable and parses it.
///
/// Unset and empty variables yield `None`. A value that is present but fails to parse
/// is reported rather than ignored.
///
/// # Arguments
/// - `name` - Name of the environment variable
/// - `parse` - Parser applied to the trimmed value
///
/// # Returns
/// - `Ok(Some(T))` - Variable set and parsed
/// - `Ok(None)` - Variable unset or empty
/// - `Err(ConfigError::InvalidEnvVar)` - Variable set but malformed
fn optional_var<T, E, F>(name: &str, parse: F) -> Result<Option<T>, ConfigError>
where
    E: std::fmt::Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    parse(value)
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true or false".to_string()),
    }
}
