use super::*;

/// Tests loading a channel file written as integers.
///
/// Verifies that every guild in the file is available after loading.
///
/// Expected: both configured channels returned
#[tokio::test]
async fn loads_existing_channels() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_channel(123, 456)
        .with_review_channel(789, 1011)
        .build()
        .await?;

    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    assert_eq!(repo.get(123).await.map(|c| c.channel_id), Some(456));
    assert_eq!(repo.get(789).await.map(|c| c.channel_id), Some(1011));

    Ok(())
}

/// Tests loading when no channel file exists.
///
/// Expected: empty repository, no file created
#[tokio::test]
async fn starts_empty_without_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    assert!(repo.get(123).await.is_none());
    assert!(!test.channel_file().exists());

    Ok(())
}

/// Tests loading a corrupt channel file.
///
/// Verifies that a malformed file does not prevent startup.
///
/// Expected: empty repository
#[tokio::test]
async fn starts_empty_with_corrupt_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_channel_file_contents("{ \"123\": 456,")
        .build()
        .await?;

    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    assert!(repo.get(123).await.is_none());

    Ok(())
}

/// Tests loading channel IDs stored as strings.
///
/// Verifies that string channel IDs are accepted and that entries with unparseable IDs
/// are skipped without dropping the rest of the file.
///
/// Expected: valid entries loaded, invalid entry skipped
#[tokio::test]
async fn accepts_string_channel_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_channel_file_contents(r#"{ "123": "456", "789": 1011, "555": "general" }"#)
        .build()
        .await?;

    let repo = ReviewChannelRepository::load(test.channel_file()).await;

    assert_eq!(repo.get(123).await.map(|c| c.channel_id), Some(456));
    assert_eq!(repo.get(789).await.map(|c| c.channel_id), Some(1011));
    assert!(repo.get(555).await.is_none());

    Ok(())
}
