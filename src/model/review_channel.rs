//! Domain models for review channel configuration.

/// Review destination configured for a guild.
///
/// At most one channel is configured per guild; setting a new one replaces the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewChannel {
    /// Discord guild ID the configuration belongs to.
    pub guild_id: u64,
    /// Discord channel ID reviews are posted to.
    pub channel_id: u64,
}

/// Parameters for setting a guild's review channel.
///
/// Creates the mapping if the guild has none, otherwise replaces the channel.
#[derive(Debug, Clone)]
pub struct UpsertReviewChannelParam {
    /// Discord guild ID being configured.
    pub guild_id: u64,
    /// Discord channel ID to post reviews to.
    pub channel_id: u64,
}
