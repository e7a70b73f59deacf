//! Interaction dispatch.
//!
//! Routes slash commands by name and component/modal interactions by their review custom
//! ID. Interactions that belong to nothing the bot created are ignored.

use serenity::all::{Context, Interaction};

use crate::bot::command::{clearreviewchannel, reviews, setreviewchannel};
use crate::state::BotState;
use crate::util::custom_id::ReviewCustomId;

use super::{review_button, review_form};

/// Dispatches an interaction to its handler.
///
/// # Arguments
/// - `state` - Shared review state
/// - `ctx` - Discord context for responding
/// - `interaction` - The received interaction
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => match command.data.name.as_str() {
            setreviewchannel::NAME => setreviewchannel::run(state, &ctx, &command).await,
            clearreviewchannel::NAME => clearreviewchannel::run(state, &ctx, &command).await,
            reviews::NAME => reviews::run(state, &ctx, &command).await,
            other => tracing::warn!("Received unknown command '{}'", other),
        },
        Interaction::Component(component) => {
            match ReviewCustomId::parse(&component.data.custom_id) {
                Some(ReviewCustomId::Open(session_id)) => {
                    review_button::handle_review_button(state, &ctx, &component, &session_id)
                        .await
                }
                _ => tracing::debug!(
                    "Ignoring component interaction '{}'",
                    component.data.custom_id
                ),
            }
        }
        Interaction::Modal(modal) => match ReviewCustomId::parse(&modal.data.custom_id) {
            Some(ReviewCustomId::Submit(session_id)) => {
                review_form::handle_review_form(state, &ctx, &modal, &session_id).await
            }
            _ => tracing::debug!("Ignoring modal submission '{}'", modal.data.custom_id),
        },
        _ => {}
    }
}
