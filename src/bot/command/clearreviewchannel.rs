//! `/clearreviewchannel` - removes the review channel (administrators only).

use serenity::all::{CommandInteraction, Context, CreateCommand, Permissions};

use crate::bot::response::{ephemeral_message, error_response};
use crate::service::review::{delivery::DiscordDelivery, ReviewService};
use crate::state::BotState;

pub const NAME: &str = "clearreviewchannel";

const GENERIC_FAILURE: &str = "❌ Failed to clear the review channel, please try again later.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Stop posting reviews in this server (administrators only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

/// Handles `/clearreviewchannel`.
pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let delivery = DiscordDelivery::new(ctx.http.clone());
    let service = ReviewService::new(&state.review_channels, &state.review_sessions, &delivery);

    let result = match super::guild_id(command) {
        Ok(guild_id) => {
            service
                .clear_review_channel(guild_id, super::is_admin(command))
                .await
        }
        Err(e) => Err(e),
    };

    let response = match result {
        Ok(removed) => ephemeral_message(format!(
            "✅ Reviews will no longer be posted to <#{}>",
            removed.channel_id
        )),
        Err(e) => error_response(&e, GENERIC_FAILURE),
    };

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", NAME, e);
    }
}
