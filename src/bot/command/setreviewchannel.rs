//! `/setreviewchannel <channel>` - sets where reviews are posted (administrators only).

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, Permissions, ResolvedValue,
};

use crate::bot::response::{ephemeral_embed, error_response};
use crate::error::review::ReviewError;
use crate::model::review::{review_now, Reviewer};
use crate::service::review::{
    builder::build_channel_set_embed, delivery::DiscordDelivery, ReviewService,
};
use crate::state::BotState;

pub const NAME: &str = "setreviewchannel";

const GENERIC_FAILURE: &str = "❌ Failed to set the review channel, please try again later.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the channel reviews are posted to (administrators only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to post reviews to",
            )
            .channel_types(vec![ChannelType::Text, ChannelType::News])
            .required(true),
        )
}

/// Handles `/setreviewchannel`.
///
/// # Arguments
/// - `state` - Shared review state
/// - `ctx` - Discord context for responding
/// - `command` - The command interaction
pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let response = match set_channel(state, ctx, command).await {
        Ok(response) => response,
        Err(e) => error_response(&e, GENERIC_FAILURE),
    };

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", NAME, e);
    }
}

async fn set_channel(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, ReviewError> {
    let guild_id = super::guild_id(command)?;
    let channel_id = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::Channel(channel) if option.name == "channel" => Some(channel.id.get()),
            _ => None,
        })
        .ok_or(ReviewError::MissingOption("channel"))?;

    let delivery = DiscordDelivery::new(ctx.http.clone());
    let service = ReviewService::new(&state.review_channels, &state.review_sessions, &delivery);
    let channel = service
        .set_review_channel(guild_id, channel_id, super::is_admin(command))
        .await?;

    let nick = command.member.as_ref().and_then(|member| member.nick.as_deref());
    let admin = Reviewer::from_user(&command.user, nick);
    let embed = build_channel_set_embed(
        channel.channel_id,
        &admin.display_name,
        &admin.avatar_url,
        review_now(),
    )?;

    Ok(ephemeral_embed(embed))
}
