//! Outbound Discord side effects of the review workflow.
//!
//! `ReviewDelivery` is the seam between the review service and Discord. `DiscordDelivery`
//! implements it with the bot's HTTP client.

use serenity::{
    all::{ChannelId, CreateActionRow, CreateMessage, MessageId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::review::ReviewError,
    model::review::{review_now, RenderedReview},
};

use super::builder::{build_prompt_button, build_prompt_embed, build_review_embed};

/// Discord operations needed by the review workflow.
#[async_trait]
pub trait ReviewDelivery: Send + Sync {
    /// Checks whether a channel can be resolved.
    async fn channel_exists(&self, channel_id: u64) -> bool;

    /// Posts the mention message and the prompt embed with its button.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - IDs of the posted prompt messages, in posting order
    /// - `Err(ReviewError)` - Posting failed; nothing is left behind
    async fn send_prompt(
        &self,
        channel_id: u64,
        target_user_id: u64,
        session_id: &str,
    ) -> Result<Vec<u64>, ReviewError>;

    /// Posts a review embed.
    async fn send_review(&self, channel_id: u64, review: &RenderedReview)
        -> Result<(), ReviewError>;

    /// Posts a public thank-you message for a reviewer.
    async fn send_thank_you(&self, channel_id: u64, reviewer_id: u64) -> Result<(), ReviewError>;

    /// Deletes a message.
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ReviewError>;
}

/// Review delivery through the Discord HTTP API.
pub struct DiscordDelivery {
    /// Discord HTTP client for sending and deleting messages
    pub http: Arc<Http>,
}

impl DiscordDelivery {
    /// Creates a new DiscordDelivery instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReviewDelivery for DiscordDelivery {
    async fn channel_exists(&self, channel_id: u64) -> bool {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to resolve review channel {}: {}", channel_id, e);
                false
            }
        }
    }

    async fn send_prompt(
        &self,
        channel_id: u64,
        target_user_id: u64,
        session_id: &str,
    ) -> Result<Vec<u64>, ReviewError> {
        let channel_id = ChannelId::new(channel_id);

        let mention = CreateMessage::new().content(format!(
            "<@{}> please press the button below to leave a review~",
            target_user_id
        ));
        let mention_message = channel_id.send_message(&self.http, mention).await?;

        let prompt = CreateMessage::new()
            .embed(build_prompt_embed(target_user_id, review_now())?)
            .components(vec![CreateActionRow::Buttons(vec![build_prompt_button(
                session_id,
            )])]);

        match channel_id.send_message(&self.http, prompt).await {
            Ok(prompt_message) => Ok(vec![mention_message.id.get(), prompt_message.id.get()]),
            Err(e) => {
                if let Err(delete_err) = self
                    .http
                    .delete_message(channel_id, mention_message.id, None)
                    .await
                {
                    tracing::warn!(
                        "Failed to remove review mention {} in channel {}: {}",
                        mention_message.id,
                        channel_id,
                        delete_err
                    );
                }
                Err(e.into())
            }
        }
    }

    async fn send_review(
        &self,
        channel_id: u64,
        review: &RenderedReview,
    ) -> Result<(), ReviewError> {
        let message = CreateMessage::new().embed(build_review_embed(review)?);
        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn send_thank_you(&self, channel_id: u64, reviewer_id: u64) -> Result<(), ReviewError> {
        let message = CreateMessage::new().content(format!(
            "🙏 Thank you <@{}> for leaving a review!",
            reviewer_id
        ));
        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ReviewError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await?;

        Ok(())
    }
}
