//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler registers the bot's slash commands:
//! - In the configured test guild only, when `TEST_GUILD_ID` is set, so changes show up
//!   immediately during development
//! - Globally otherwise
//!
//! Registration replaces the full command list, so removed commands disappear as well.

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::bot::command;
use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps running and serves any commands
/// registered by a previous run.
///
/// # Arguments
/// - `state` - Bot state holding the optional test guild
/// - `ctx` - Discord context for registering commands and setting activity
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Collecting reviews")));

    let commands = command::all();
    let count = commands.len();

    match state.test_guild_id {
        Some(guild_id) => match GuildId::new(guild_id).set_commands(&ctx.http, commands).await {
            Ok(_) => tracing::info!("Registered {} commands in guild {}", count, guild_id),
            Err(e) => tracing::error!(
                "Failed to register commands in guild {}: {:?}",
                guild_id,
                e
            ),
        },
        None => match Command::set_global_commands(&ctx.http, commands).await {
            Ok(_) => tracing::info!("Registered {} global commands", count),
            Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
        },
    }
}
