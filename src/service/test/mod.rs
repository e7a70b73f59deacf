//! Tests for the review service, run against a recording delivery.

use serenity::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::{
    error::review::ReviewError, model::review::RenderedReview,
    service::review::delivery::ReviewDelivery,
};


/// A side effect recorded by [`RecordingDelivery`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Prompt {
        channel_id: u64,
        target_user_id: u64,
        session_id: String,
    },
    Review {
        channel_id: u64,
        review: RenderedReview,
    },
    ThankYou {
        channel_id: u64,
        reviewer_id: u64,
    },
    Delete {
        channel_id: u64,
        message_id: u64,
    },
}

/// Delivery that records every outbound operation instead of calling Discord.
///
/// Prompt message IDs are handed out sequentially starting at 1000.
#[derive(Default)]
pub struct RecordingDelivery {
    sent: Mutex<Vec<Sent>>,
    failed_prompts: Mutex<Vec<String>>,
    next_message_id: Mutex<u64>,
    missing_channels: HashSet<u64>,
    fail_prompt: bool,
    fail_delete: bool,
}

impl RecordingDelivery {
    pub fn new() -> Self {
        Self {
            next_message_id: Mutex::new(1000),
            ..Default::default()
        }
    }

    /// Makes `channel_exists` report the channel as unresolvable.
    pub fn with_missing_channel(mut self, channel_id: u64) -> Self {
        self.missing_channels.insert(channel_id);
        self
    }

    pub fn with_failing_prompt(mut self) -> Self {
        self.fail_prompt = true;
        self
    }

    pub fn with_failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Session IDs of prompts that failed to post.
    pub fn failed_prompts(&self) -> Vec<String> {
        self.failed_prompts.lock().unwrap().clone()
    }

    pub fn reviews(&self) -> Vec<(u64, RenderedReview)> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Review { channel_id, review } => Some((channel_id, review)),
                _ => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Delete { message_id, .. } => Some(message_id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }

    fn next_id(&self) -> u64 {
        let mut next = self.next_message_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }
}

fn discord_failure() -> ReviewError {
    ReviewError::from(serenity::Error::Other("simulated Discord failure"))
}

#[async_trait]
impl ReviewDelivery for RecordingDelivery {
    async fn channel_exists(&self, channel_id: u64) -> bool {
        !self.missing_channels.contains(&channel_id)
    }

    async fn send_prompt(
        &self,
        channel_id: u64,
        target_user_id: u64,
        session_id: &str,
    ) -> Result<Vec<u64>, ReviewError> {
        if self.fail_prompt {
            self.failed_prompts
                .lock()
                .unwrap()
                .push(session_id.to_string());
            return Err(discord_failure());
        }

        self.record(Sent::Prompt {
            channel_id,
            target_user_id,
            session_id: session_id.to_string(),
        });

        Ok(vec![self.next_id(), self.next_id()])
    }

    async fn send_review(
        &self,
        channel_id: u64,
        review: &RenderedReview,
    ) -> Result<(), ReviewError> {
        self.record(Sent::Review {
            channel_id,
            review: review.clone(),
        });
        Ok(())
    }

    async fn send_thank_you(&self, channel_id: u64, reviewer_id: u64) -> Result<(), ReviewError> {
        self.record(Sent::ThankYou {
            channel_id,
            reviewer_id,
        });
        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), ReviewError> {
        if self.fail_delete {
            return Err(discord_failure());
        }

        self.record(Sent::Delete {
            channel_id,
            message_id,
        });
        Ok(())
    }
}
