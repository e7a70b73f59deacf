//! Component custom IDs for review prompts.
//!
//! The review button and the review form both carry the session ID after a fixed prefix,
//! e.g. `review_open:<session id>` and `review_submit:<session id>`.

const OPEN_PREFIX: &str = "review_open:";
const SUBMIT_PREFIX: &str = "review_submit:";

/// A parsed review component custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCustomId {
    /// The "write a review" button of a prompt.
    Open(String),
    /// The review form opened by the button.
    Submit(String),
}

impl ReviewCustomId {
    /// Parses a component or modal custom ID.
    ///
    /// # Arguments
    /// - `value` - The custom ID received with the interaction
    ///
    /// # Returns
    /// - `Some(ReviewCustomId)` - A review custom ID with a non-empty session ID
    /// - `None` - The custom ID belongs to something else
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(id) = value.strip_prefix(OPEN_PREFIX) {
            return (!id.is_empty()).then(|| Self::Open(id.to_string()));
        }
        if let Some(id) = value.strip_prefix(SUBMIT_PREFIX) {
            return (!id.is_empty()).then(|| Self::Submit(id.to_string()));
        }
        None
    }

    pub fn open(session_id: &str) -> String {
        format!("{OPEN_PREFIX}{session_id}")
    }

    pub fn submit(session_id: &str) -> String {
        format!("{SUBMIT_PREFIX}{session_id}")
    }
}
