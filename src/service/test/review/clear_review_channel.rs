use super::*;

/// Tests an administrator clearing the review channel.
///
/// Expected: Ok(removed channel), guild no longer configured
#[tokio::test]
async fn administrator_clears_channel() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_channel(GUILD_ID, REVIEW_CHANNEL_ID)
        .build()
        .await?;
    let channels = ReviewChannelRepository::load(test.channel_file()).await;
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service.clear_review_channel(GUILD_ID, true).await;

    assert_eq!(result.unwrap().channel_id, REVIEW_CHANNEL_ID);
    assert!(channels.get(GUILD_ID).await.is_none());
    assert_eq!(test.read_channel_file().await?, serde_json::json!({}));

    Ok(())
}

/// Tests clearing when no channel is configured.
///
/// Expected: Err(NoChannelConfigured)
#[tokio::test]
async fn rejects_unconfigured_guild() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service.clear_review_channel(GUILD_ID, true).await;

    assert!(matches!(
        result,
        Err(ReviewError::NoChannelConfigured(GUILD_ID))
    ));

    Ok(())
}

/// Tests a non-administrator attempting to clear the review channel.
///
/// Expected: Err(PermissionDenied), channel kept
#[tokio::test]
async fn rejects_non_administrator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_channel(GUILD_ID, REVIEW_CHANNEL_ID)
        .build()
        .await?;
    let channels = ReviewChannelRepository::load(test.channel_file()).await;
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service.clear_review_channel(GUILD_ID, false).await;

    assert!(matches!(result, Err(ReviewError::PermissionDenied)));
    assert!(channels.get(GUILD_ID).await.is_some());

    Ok(())
}
