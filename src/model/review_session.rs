//! Domain models for review prompt sessions.
//!
//! A session links the prompt messages posted by `/reviews` to the user the review is
//! requested from. Its ID is embedded in the prompt button and the review form custom IDs,
//! so later interactions find the binding without any captured state.

use std::time::{Duration, Instant};

/// An issued review prompt awaiting a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSession {
    /// Randomly generated session identifier.
    pub id: String,
    /// Discord guild ID the prompt was issued in.
    pub guild_id: u64,
    /// Discord channel ID the prompt messages were posted to.
    pub channel_id: u64,
    /// Discord user ID of the only user allowed to fill in the review.
    pub target_user_id: u64,
    /// Discord message IDs of the prompt messages, deleted after a successful submission.
    pub message_ids: Vec<u64>,
    /// When the session was created.
    pub created_at: Instant,
}

impl ReviewSession {
    /// Checks whether the session has outlived the prompt timeout.
    ///
    /// # Arguments
    /// - `timeout` - Prompt timeout, `None` for prompts that never expire
    ///
    /// # Returns
    /// - `true` - A timeout is configured and has elapsed
    /// - `false` - No timeout, or the session is still within it
    pub fn is_expired(&self, timeout: Option<Duration>) -> bool {
        match timeout {
            Some(timeout) => Instant::now() >= self.created_at + timeout,
            None => false,
        }
    }
}

/// Parameters for creating a review session.
#[derive(Debug, Clone)]
pub struct CreateReviewSessionParam {
    /// Discord guild ID the prompt is issued in.
    pub guild_id: u64,
    /// Discord channel ID the prompt is posted to.
    pub channel_id: u64,
    /// Discord user ID the review is requested from.
    pub target_user_id: u64,
}
