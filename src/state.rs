//! State shared by every Discord event handler.
//!
//! `BotState` is built once at startup and handed to the serenity event handler. All
//! fields are cheap to clone:
//! - The repositories wrap their maps in `Arc<RwLock<..>>`, so clones share state
//! - The options are plain copies of configuration values

use crate::data::{review_channel::ReviewChannelRepository, review_session::ReviewSessionRepository};

#[derive(Clone)]
pub struct BotState {
    /// Guild review channel configuration, persisted to the review channel file.
    pub review_channels: ReviewChannelRepository,

    /// Issued review prompts awaiting submission.
    pub review_sessions: ReviewSessionRepository,

    /// Whether a public thank-you is posted after each successful review.
    pub review_thank_you: bool,

    /// Guild to register commands in instead of registering them globally.
    pub test_guild_id: Option<u64>,
}

impl BotState {
    /// Creates the bot state from its repositories and options.
    ///
    /// # Arguments
    /// - `review_channels` - Loaded review channel repository
    /// - `review_sessions` - Empty review session repository
    /// - `review_thank_you` - Whether to post thank-you messages
    /// - `test_guild_id` - Optional guild for scoped command registration
    pub fn new(
        review_channels: ReviewChannelRepository,
        review_sessions: ReviewSessionRepository,
        review_thank_you: bool,
        test_guild_id: Option<u64>,
    ) -> Self {
        Self {
            review_channels,
            review_sessions,
            review_thank_you,
            test_guild_id,
        }
    }
}
