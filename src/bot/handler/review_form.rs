//! Handler for submitted review forms.

use serenity::all::{
    ActionRowComponent, Context, CreateInteractionResponseFollowup, ModalInteraction,
};

use crate::bot::response::error_message;
use crate::model::review::{review_now, ReviewForm, Reviewer};
use crate::service::review::{delivery::DiscordDelivery, ReviewService};
use crate::state::BotState;

const GENERIC_FAILURE: &str = "❌ Review submission failed, please try again later.";

/// Validates and posts a submitted review.
///
/// The interaction is deferred first since posting the review and cleaning up the prompt
/// can take longer than Discord's response window. On success the submitter gets an
/// ephemeral confirmation naming the review channel, and only then is the prompt deleted.
/// Every failure, including unexpected ones, is answered ephemerally through the error
/// adapter.
///
/// # Arguments
/// - `state` - Shared review state
/// - `ctx` - Discord context for responding and posting
/// - `modal` - The modal submission
/// - `session_id` - Session ID parsed from the modal's custom ID
pub async fn handle_review_form(
    state: &BotState,
    ctx: &Context,
    modal: &ModalInteraction,
    session_id: &str,
) {
    if let Err(e) = modal.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Failed to defer review submission for session {}: {:?}",
            session_id,
            e
        );
        return;
    }

    let delivery = DiscordDelivery::new(ctx.http.clone());
    let service = ReviewService::new(&state.review_channels, &state.review_sessions, &delivery)
        .with_thank_you(state.review_thank_you);

    let form = ReviewForm::from_fields(modal.data.components.iter().flat_map(|row| {
        row.components.iter().filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.as_str(),
                input.value.as_deref().unwrap_or_default(),
            )),
            _ => None,
        })
    }));

    let nick = modal.member.as_ref().and_then(|member| member.nick.as_deref());
    let reviewer = Reviewer::from_user(&modal.user, nick);

    let result = service.submit(session_id, form, reviewer, review_now()).await;

    let content = match &result {
        Ok(submitted) => format!(
            "✅ Your review has been submitted to <#{}>",
            submitted.channel.channel_id
        ),
        Err(e) => error_message(e, GENERIC_FAILURE).to_string(),
    };

    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);

    if let Err(e) = modal.create_followup(&ctx.http, followup).await {
        tracing::error!(
            "Failed to respond to review submission for session {}: {:?}",
            session_id,
            e
        );
    }

    if let Ok(submitted) = result {
        service.finish(&submitted).await;
    }
}
