use super::*;

/// Tests removing a configured review channel.
///
/// Expected: Ok(Some(channel)), guild removed from memory and file
#[tokio::test]
async fn removes_channel() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_channel(123, 456)
        .with_review_channel(789, 1011)
        .build()
        .await?;
    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    let result = repo.delete(123).await.unwrap();

    assert_eq!(
        result,
        Some(ReviewChannel {
            guild_id: 123,
            channel_id: 456,
        })
    );
    assert!(repo.get(123).await.is_none());
    assert_eq!(
        test.read_channel_file().await?,
        serde_json::json!({ "789": 1011 })
    );

    Ok(())
}

/// Tests removing a channel from a guild without configuration.
///
/// Expected: Ok(None), no file written
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let repo = ReviewChannelRepository::new(test.channel_file());

    let result = repo.delete(123).await.unwrap();

    assert!(result.is_none());
    assert!(!test.channel_file().exists());

    Ok(())
}
