//! Interaction responses and the error adapter.
//!
//! Every interaction handler produces a `Result<CreateInteractionResponse, ReviewError>`
//! and passes errors through [`error_response`], the single place where review errors
//! become user-facing messages. All failure messages are ephemeral.

use serenity::all::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::error::review::ReviewError;

/// Ephemeral plain-text response.
pub fn ephemeral_message(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Ephemeral embed response.
pub fn ephemeral_embed(embed: CreateEmbed) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    )
}

/// Picks the message shown to the user for an error.
///
/// Anticipated errors are logged at warn level and use their own message. Unexpected
/// errors are logged with their full source chain and replaced by `generic` so internal
/// details never reach the user.
///
/// # Arguments
/// - `err` - The error returned by the handler
/// - `generic` - The operation's generic failure message
pub fn error_message<'a>(err: &'a ReviewError, generic: &'a str) -> &'a str {
    match err.user_message() {
        Some(message) => {
            tracing::warn!("Rejected review interaction: {}", err);
            message
        }
        None => {
            tracing::error!("Review interaction failed: {:?}", err);
            generic
        }
    }
}

/// Converts a handler error into an ephemeral response.
pub fn error_response(err: &ReviewError, generic: &str) -> CreateInteractionResponse {
    ephemeral_message(error_message(err, generic))
}
