//! In-memory repository for review prompt sessions.
//!
//! Sessions are keyed by a random 32-character alphanumeric ID. When a prompt timeout is
//! configured, sessions older than the timeout are treated as absent and removed the next
//! time they are looked up or when a new session is created. Without a timeout, the
//! number of open sessions is capped at [`MAX_SESSIONS`] and the oldest prompt stops
//! working once the cap is reached.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::review_session::{CreateReviewSessionParam, ReviewSession};

/// Length of generated session IDs.
pub const SESSION_ID_LENGTH: usize = 32;

/// Maximum number of open sessions kept in memory.
pub const MAX_SESSIONS: usize = 1000;

/// Repository providing storage for issued review prompts.
///
/// Clones share the same session map.
#[derive(Clone)]
pub struct ReviewSessionRepository {
    sessions: Arc<RwLock<HashMap<String, ReviewSession>>>,
    timeout: Option<Duration>,
}

impl ReviewSessionRepository {
    /// Creates an empty session repository.
    ///
    /// # Arguments
    /// - `timeout` - How long prompts stay active, `None` for no timeout
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            timeout,
        }
    }

    /// Creates a session with a freshly generated ID and no prompt messages.
    ///
    /// Expired sessions are pruned first. If the repository is still full, the oldest
    /// session is evicted.
    ///
    /// # Arguments
    /// - `param` - Guild, channel, and target user of the prompt
    ///
    /// # Returns
    /// - `ReviewSession` - The stored session
    pub async fn create(&self, param: CreateReviewSessionParam) -> ReviewSession {
        let mut sessions = self.sessions.write().await;
        let timeout = self.timeout;
        sessions.retain(|_, session| !session.is_expired(timeout));

        while sessions.len() >= MAX_SESSIONS {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|session| session.created_at)
                .map(|session| session.id.clone())
            else {
                break;
            };
            tracing::debug!("Evicting review session {} to stay under the cap", oldest);
            sessions.remove(&oldest);
        }

        let mut id = generate_session_id();
        while sessions.contains_key(&id) {
            id = generate_session_id();
        }

        let session = ReviewSession {
            id: id.clone(),
            guild_id: param.guild_id,
            channel_id: param.channel_id,
            target_user_id: param.target_user_id,
            message_ids: Vec::new(),
            created_at: Instant::now(),
        };
        sessions.insert(id, session.clone());

        session
    }

    /// Records the prompt message IDs of a session.
    ///
    /// # Returns
    /// - `Some(ReviewSession)` - The updated session
    /// - `None` - No active session with this ID
    pub async fn set_message_ids(&self, id: &str, message_ids: Vec<u64>) -> Option<ReviewSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id)?;
        session.message_ids = message_ids;
        Some(session.clone())
    }

    /// Gets an active session.
    ///
    /// An expired session is removed and reported as absent.
    ///
    /// # Returns
    /// - `Some(ReviewSession)` - Session exists and has not timed out
    /// - `None` - Unknown ID or expired session
    pub async fn get(&self, id: &str) -> Option<ReviewSession> {
        let mut sessions = self.sessions.write().await;

        let expired = sessions.get(id)?.is_expired(self.timeout);
        if expired {
            tracing::debug!("Review session {} expired", id);
            sessions.remove(id);
            return None;
        }

        sessions.get(id).cloned()
    }

    /// Removes a session regardless of expiry.
    ///
    /// # Returns
    /// - `Some(ReviewSession)` - The removed session
    /// - `None` - No session with this ID
    pub async fn remove(&self, id: &str) -> Option<ReviewSession> {
        self.sessions.write().await.remove(id)
    }
}

/// Generates a random alphanumeric session ID.
///
/// The ID is embedded in component custom IDs, which Discord limits to 100 characters.
fn generate_session_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..SESSION_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
