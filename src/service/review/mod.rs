//! Review workflow service.
//!
//! Implements the four steps of the review lifecycle:
//! - **Configure** - administrators set or clear the guild's review channel
//! - **Prompt** - `/reviews` posts a prompt bound to one target user and records a session
//! - **Activate** - the prompt button opens the review form for the target user only
//! - **Submit** - the form is checked, validated, rendered, and posted to the review channel
//! - **Finish** - after the reviewer is told, the prompt is deleted and thanks are posted
//!
//! Every check happens before any outbound message, so a rejected submission never
//! reaches the review channel and leaves the prompt in place.

pub mod builder;
pub mod delivery;

use chrono::{DateTime, FixedOffset};

use crate::{
    data::{review_channel::ReviewChannelRepository, review_session::ReviewSessionRepository},
    error::review::ReviewError,
    model::{
        review::{Rating, ReviewForm, ReviewSubmission, Reviewer},
        review_channel::{ReviewChannel, UpsertReviewChannelParam},
        review_session::{CreateReviewSessionParam, ReviewSession},
    },
};

use delivery::ReviewDelivery;

/// A review that has been posted, with the prompt it answered.
#[derive(Debug, Clone)]
pub struct SubmittedReview {
    /// Review channel the review was posted to
    pub channel: ReviewChannel,
    /// The completed session, holding the prompt messages to delete
    pub session: ReviewSession,
    /// Discord user ID of the reviewer
    pub reviewer_id: u64,
}

/// Service struct for the review workflow.
pub struct ReviewService<'a, D: ReviewDelivery> {
    /// Guild review channel configuration
    channels: &'a ReviewChannelRepository,
    /// Issued review prompts
    sessions: &'a ReviewSessionRepository,
    /// Discord side effects
    delivery: &'a D,
    /// Whether to post a public thank-you after a successful submission
    thank_you: bool,
}

impl<'a, D: ReviewDelivery> ReviewService<'a, D> {
    /// Creates a new ReviewService instance with the thank-you message disabled.
    ///
    /// # Arguments
    /// - `channels` - Review channel repository
    /// - `sessions` - Review session repository
    /// - `delivery` - Outbound Discord operations
    pub fn new(
        channels: &'a ReviewChannelRepository,
        sessions: &'a ReviewSessionRepository,
        delivery: &'a D,
    ) -> Self {
        Self {
            channels,
            sessions,
            delivery,
            thank_you: false,
        }
    }

    pub fn with_thank_you(mut self, enabled: bool) -> Self {
        self.thank_you = enabled;
        self
    }

    /// Sets the review channel of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `channel_id` - Channel reviews are posted to
    /// - `is_admin` - Whether the invoking member has the administrator permission
    ///
    /// # Returns
    /// - `Ok(ReviewChannel)` - The stored configuration
    /// - `Err(ReviewError::PermissionDenied)` - Invoker is not an administrator
    /// - `Err(ReviewError::PersistenceFailure)` - Writing the channel file failed; the
    ///   previous configuration stays in effect
    pub async fn set_review_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
        is_admin: bool,
    ) -> Result<ReviewChannel, ReviewError> {
        if !is_admin {
            return Err(ReviewError::PermissionDenied);
        }

        let channel = self
            .channels
            .upsert(UpsertReviewChannelParam {
                guild_id,
                channel_id,
            })
            .await?;

        tracing::info!("Review channel for guild {} set to {}", guild_id, channel_id);

        Ok(channel)
    }

    /// Removes the review channel of a guild.
    ///
    /// # Returns
    /// - `Ok(ReviewChannel)` - The removed configuration
    /// - `Err(ReviewError::PermissionDenied)` - Invoker is not an administrator
    /// - `Err(ReviewError::NoChannelConfigured)` - Nothing to remove
    /// - `Err(ReviewError::PersistenceFailure)` - Writing the channel file failed
    pub async fn clear_review_channel(
        &self,
        guild_id: u64,
        is_admin: bool,
    ) -> Result<ReviewChannel, ReviewError> {
        if !is_admin {
            return Err(ReviewError::PermissionDenied);
        }

        let removed = self
            .channels
            .delete(guild_id)
            .await?
            .ok_or(ReviewError::NoChannelConfigured(guild_id))?;

        tracing::info!(
            "Review channel {} cleared for guild {}",
            removed.channel_id,
            guild_id
        );

        Ok(removed)
    }

    /// Posts a review prompt for a target user and records its session.
    ///
    /// The session is created before posting so the button is valid as soon as it
    /// appears. If posting fails the session is discarded.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the prompt is issued in
    /// - `channel_id` - Channel to post the prompt to
    /// - `target_user_id` - The only user allowed to fill in the review
    ///
    /// # Returns
    /// - `Ok(ReviewSession)` - Session holding the prompt message IDs
    /// - `Err(ReviewError::Discord)` - Posting the prompt failed
    pub async fn issue_prompt(
        &self,
        guild_id: u64,
        channel_id: u64,
        target_user_id: u64,
    ) -> Result<ReviewSession, ReviewError> {
        let session = self
            .sessions
            .create(CreateReviewSessionParam {
                guild_id,
                channel_id,
                target_user_id,
            })
            .await;

        let message_ids = match self
            .delivery
            .send_prompt(channel_id, target_user_id, &session.id)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                self.sessions.remove(&session.id).await;
                return Err(e);
            }
        };

        let session = self
            .sessions
            .set_message_ids(&session.id, message_ids)
            .await
            .ok_or_else(|| ReviewError::SessionExpired(session.id.clone()))?;

        tracing::debug!(
            "Issued review prompt {} for user {} in channel {}",
            session.id,
            target_user_id,
            channel_id
        );

        Ok(session)
    }

    /// Checks that a user may open the review form of a prompt.
    ///
    /// # Arguments
    /// - `session_id` - Session ID from the button's custom ID
    /// - `user_id` - User who pressed the button
    ///
    /// # Returns
    /// - `Ok(ReviewSession)` - The user is the prompt's target
    /// - `Err(ReviewError::SessionExpired)` - Unknown or timed-out prompt
    /// - `Err(ReviewError::NotAuthorized)` - Someone else pressed the button
    pub async fn activate(&self, session_id: &str, user_id: u64) -> Result<ReviewSession, ReviewError> {
        let session = self.active_session(session_id).await?;
        ensure_target(&session, user_id)?;

        Ok(session)
    }

    /// Validates a submitted review form and posts the review.
    ///
    /// Runs the identity check, resolves the review channel, and validates the rating,
    /// in that order, before sending anything. On success the review is posted and the
    /// session is dropped. The prompt is left in place for [`Self::finish`], which the
    /// caller runs after confirming the submission to the reviewer.
    ///
    /// # Arguments
    /// - `session_id` - Session ID from the form's custom ID
    /// - `form` - Submitted form values
    /// - `reviewer` - Identity of the submitting user
    /// - `submitted_at` - Submission time
    ///
    /// # Returns
    /// - `Ok(SubmittedReview)` - Where the review was posted, and the prompt to clean up
    /// - `Err(ReviewError::SessionExpired)` - Unknown or timed-out prompt
    /// - `Err(ReviewError::NotAuthorized)` - Submitter is not the prompt's target
    /// - `Err(ReviewError::NoChannelConfigured)` - Guild has no review channel
    /// - `Err(ReviewError::ChannelNotFound)` - Configured channel cannot be resolved
    /// - `Err(ReviewError::InvalidRatingFormat)` - Rating is not an integer
    /// - `Err(ReviewError::RatingOutOfRange)` - Rating outside 1 to 5
    /// - `Err(ReviewError::Discord)` - Posting the review failed
    pub async fn submit(
        &self,
        session_id: &str,
        form: ReviewForm,
        reviewer: Reviewer,
        submitted_at: DateTime<FixedOffset>,
    ) -> Result<SubmittedReview, ReviewError> {
        let session = self.active_session(session_id).await?;
        ensure_target(&session, reviewer.id)?;

        let channel = self
            .channels
            .get(session.guild_id)
            .await
            .ok_or(ReviewError::NoChannelConfigured(session.guild_id))?;

        if !self.delivery.channel_exists(channel.channel_id).await {
            return Err(ReviewError::ChannelNotFound(channel.channel_id));
        }

        let rating = Rating::parse(&form.rating)?;

        let reviewer_id = reviewer.id;
        let submission = ReviewSubmission {
            product: form.product.trim().to_string(),
            rating,
            feedback: form.feedback,
            reviewer,
            submitted_at,
        };

        self.delivery
            .send_review(channel.channel_id, &submission.render())
            .await?;

        tracing::info!(
            "Posted {}/5 review of '{}' by user {} to channel {}",
            rating.value(),
            submission.product,
            reviewer_id,
            channel.channel_id
        );

        self.sessions.remove(&session.id).await;

        Ok(SubmittedReview {
            channel,
            session,
            reviewer_id,
        })
    }

    /// Cleans up after a posted review.
    ///
    /// Deletes the prompt messages on a best-effort basis and posts the optional
    /// thank-you message to the prompt's channel. Failures are logged and ignored.
    ///
    /// # Arguments
    /// - `submitted` - Result of a successful [`Self::submit`]
    pub async fn finish(&self, submitted: &SubmittedReview) {
        let session = &submitted.session;

        for &message_id in &session.message_ids {
            if let Err(e) = self
                .delivery
                .delete_message(session.channel_id, message_id)
                .await
            {
                tracing::debug!(
                    "Ignoring failure to delete review prompt message {}: {}",
                    message_id,
                    e
                );
            }
        }

        if self.thank_you {
            if let Err(e) = self
                .delivery
                .send_thank_you(session.channel_id, submitted.reviewer_id)
                .await
            {
                tracing::warn!(
                    "Failed to post thank-you message in channel {}: {}",
                    session.channel_id,
                    e
                );
            }
        }
    }

    async fn active_session(&self, session_id: &str) -> Result<ReviewSession, ReviewError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or_else(|| ReviewError::SessionExpired(session_id.to_string()))
    }
}

/// Rejects users other than the session's target.
fn ensure_target(session: &ReviewSession, user_id: u64) -> Result<(), ReviewError> {
    if session.target_user_id != user_id {
        return Err(ReviewError::NotAuthorized {
            user_id,
            target_id: session.target_user_id,
        });
    }

    Ok(())
}
