//! Handler for the "write a review" button on review prompts.

use serenity::all::{ComponentInteraction, Context, CreateInteractionResponse};

use crate::bot::response::error_response;
use crate::service::review::{
    builder::build_review_form, delivery::DiscordDelivery, ReviewService,
};
use crate::state::BotState;

const GENERIC_FAILURE: &str = "❌ Could not open the review form, please try again later.";

/// Opens the review form for the prompt's target user.
///
/// Anyone else pressing the button gets an ephemeral rejection. Buttons of expired or
/// already completed prompts are inert and answer with an ephemeral notice.
///
/// # Arguments
/// - `state` - Shared review state
/// - `ctx` - Discord context for responding
/// - `component` - The button interaction
/// - `session_id` - Session ID parsed from the button's custom ID
pub async fn handle_review_button(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
    session_id: &str,
) {
    let delivery = DiscordDelivery::new(ctx.http.clone());
    let service = ReviewService::new(&state.review_channels, &state.review_sessions, &delivery);

    let response = match service.activate(session_id, component.user.id.get()).await {
        Ok(session) => CreateInteractionResponse::Modal(build_review_form(&session.id)),
        Err(e) => error_response(&e, GENERIC_FAILURE),
    };

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to review button for session {}: {:?}",
            session_id,
            e
        );
    }
}
