use thiserror::Error;

use crate::error::store::StoreError;

/// Errors produced by the review workflow.
///
/// Every anticipated rejection has its own variant with a fixed user-facing message
/// returned by [`ReviewError::user_message`]. The remaining variants are unexpected
/// failures: the interaction layer logs them in full and replies with the generic failure
/// message of the operation instead of exposing the underlying error.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The invoking member lacks the administrator permission.
    #[error("Administrator permission is required")]
    PermissionDenied,

    /// The interaction was not issued from inside a guild.
    #[error("Interaction was not issued from a guild")]
    NotInGuild,

    /// No review channel is configured for the guild.
    #[error("No review channel configured for guild {0}")]
    NoChannelConfigured(u64),

    /// The configured review channel could not be resolved through Discord.
    #[error("Review channel {0} could not be found")]
    ChannelNotFound(u64),

    /// The rating field did not parse as an integer.
    #[error("Rating '{0}' is not an integer")]
    InvalidRatingFormat(String),

    /// The rating parsed but lies outside 1 to 5.
    #[error("Rating {0} is outside the range 1-5")]
    RatingOutOfRange(i64),

    /// The acting user is not the user the review prompt was issued for.
    #[error("User {user_id} is not the review target {target_id}")]
    NotAuthorized {
        /// Discord ID of the user who acted on the prompt
        user_id: u64,
        /// Discord ID of the user the prompt is bound to
        target_id: u64,
    },

    /// The review session does not exist or its prompt has timed out.
    #[error("Review session {0} has expired or does not exist")]
    SessionExpired(String),

    /// A required command option was missing from the interaction.
    ///
    /// Discord enforces required options, so this indicates a stale command registration.
    #[error("Command option '{0}' is missing")]
    MissingOption(&'static str),

    /// Writing the review channel file failed.
    #[error(transparent)]
    PersistenceFailure(#[from] StoreError),

    /// Failure to convert a submission time to a Discord timestamp.
    ///
    /// Occurs when the time is outside the range Discord accepts.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

/// Boxes the error to keep `ReviewError` small, as with `AppError`.
impl From<serenity::Error> for ReviewError {
    fn from(err: serenity::Error) -> Self {
        ReviewError::Discord(Box::new(err))
    }
}

impl ReviewError {
    /// Returns the ephemeral message shown to the user for anticipated errors.
    ///
    /// # Returns
    /// - `Some(&str)` - Specific message for an anticipated rejection
    /// - `None` - Unexpected failure; the caller logs it and falls back to the
    ///   operation's generic failure message
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied => Some("❌ Only administrators can use this command."),
            Self::NotInGuild => Some("❌ This can only be used inside a server."),
            Self::NoChannelConfigured(_) => {
                Some("❌ No review channel has been set up for this server yet.")
            }
            Self::ChannelNotFound(_) => Some("❌ The review channel could not be found."),
            Self::InvalidRatingFormat(_) => {
                Some("❌ Invalid rating format, please enter a whole number from 1 to 5.")
            }
            Self::RatingOutOfRange(_) => Some("❌ The rating must be between 1 and 5."),
            Self::NotAuthorized { .. } => {
                Some("❌ You are not the person this review was requested from.")
            }
            Self::SessionExpired(_) => Some("❌ This review prompt is no longer active."),
            Self::MissingOption(_)
            | Self::PersistenceFailure(_)
            | Self::InvalidTimestamp { .. }
            | Self::Discord(_) => None,
        }
    }
}
