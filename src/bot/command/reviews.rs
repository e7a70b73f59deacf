//! `/reviews <user>` - asks a user to fill in a review.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedValue,
};

use crate::bot::response::{ephemeral_message, error_response};
use crate::error::review::ReviewError;
use crate::service::review::{delivery::DiscordDelivery, ReviewService};
use crate::state::BotState;

pub const NAME: &str = "reviews";

const GENERIC_FAILURE: &str = "❌ Could not show the review prompt.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the review prompt to a user")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The user who should write the review",
            )
            .required(true),
        )
}

/// Handles `/reviews`.
///
/// Posts the prompt into the channel the command was used in and confirms ephemerally
/// to the invoker.
pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let response = match issue_prompt(state, ctx, command).await {
        Ok(()) => ephemeral_message("✅ Review prompt sent."),
        Err(e) => error_response(&e, GENERIC_FAILURE),
    };

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", NAME, e);
    }
}

async fn issue_prompt(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), ReviewError> {
    let guild_id = super::guild_id(command)?;
    let target_user_id = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) if option.name == "user" => Some(user.id.get()),
            _ => None,
        })
        .ok_or(ReviewError::MissingOption("user"))?;

    let delivery = DiscordDelivery::new(ctx.http.clone());
    let service = ReviewService::new(&state.review_channels, &state.review_sessions, &delivery);
    service
        .issue_prompt(guild_id, command.channel_id.get(), target_user_id)
        .await?;

    Ok(())
}
