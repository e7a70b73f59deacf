use super::*;

/// Tests the target user pressing the prompt button.
///
/// Expected: Ok(session)
#[tokio::test]
async fn target_user_opens_form() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let session = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await
        .unwrap();

    let result = service.activate(&session.id, TARGET_USER_ID).await;

    assert_eq!(result.unwrap().id, session.id);

    Ok(())
}

/// Tests another user pressing the prompt button.
///
/// Verifies the rejection sends nothing and keeps the prompt usable by the target.
///
/// Expected: Err(NotAuthorized), no outbound messages besides the prompt
#[tokio::test]
async fn rejects_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let session = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await
        .unwrap();

    let result = service.activate(&session.id, OTHER_USER_ID).await;

    assert!(matches!(
        result,
        Err(ReviewError::NotAuthorized {
            user_id: OTHER_USER_ID,
            target_id: TARGET_USER_ID,
        })
    ));
    assert_eq!(delivery.sent().len(), 1);
    assert!(service.activate(&session.id, TARGET_USER_ID).await.is_ok());

    Ok(())
}

/// Tests pressing a button whose session is unknown.
///
/// Covers prompts issued before a restart, since sessions live in memory.
///
/// Expected: Err(SessionExpired)
#[tokio::test]
async fn rejects_unknown_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service.activate("unknown", TARGET_USER_ID).await;

    assert!(matches!(result, Err(ReviewError::SessionExpired(_))));

    Ok(())
}

/// Tests pressing the button after the prompt timed out.
///
/// Expected: Err(SessionExpired), no cleanup message sent
#[tokio::test]
async fn rejects_expired_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(Some(Duration::from_millis(50)));
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let session = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let result = service.activate(&session.id, TARGET_USER_ID).await;

    assert!(matches!(result, Err(ReviewError::SessionExpired(_))));
    assert_eq!(delivery.sent().len(), 1);

    Ok(())
}
