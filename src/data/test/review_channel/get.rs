use super::*;

/// Tests retrieving a configured review channel.
///
/// Expected: Some(ReviewChannel) with the guild and channel IDs
#[tokio::test]
async fn returns_configured_channel() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_channel(123, 456).build().await?;
    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    let result = repo.get(123).await;

    assert_eq!(
        result,
        Some(ReviewChannel {
            guild_id: 123,
            channel_id: 456,
        })
    );

    Ok(())
}

/// Tests review channels are isolated per guild.
///
/// Expected: None for a guild without configuration
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), TestError> {
    let test = TestBuilder::new().with_review_channel(123, 456).build().await?;
    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    assert!(repo.get(999).await.is_none());

    Ok(())
}
