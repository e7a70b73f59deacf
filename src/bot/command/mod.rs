//! Slash command definitions and handlers.
//!
//! Each command module exposes its `NAME`, a `register()` builder used when the bot
//! becomes ready, and a `run()` handler called by the interaction dispatcher.

use serenity::all::{CommandInteraction, CreateCommand};

use crate::error::review::ReviewError;

pub mod clearreviewchannel;
pub mod reviews;
pub mod setreviewchannel;

/// Builds every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![
        setreviewchannel::register(),
        clearreviewchannel::register(),
        reviews::register(),
    ]
}

/// Guild the command was invoked in.
fn guild_id(command: &CommandInteraction) -> Result<u64, ReviewError> {
    command
        .guild_id
        .map(|id| id.get())
        .ok_or(ReviewError::NotInGuild)
}

/// Whether the invoking member holds the administrator permission.
///
/// Discord already hides administrator-only commands from other members through the
/// command's default member permissions; this is the runtime check for servers that
/// override those defaults.
fn is_admin(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}
