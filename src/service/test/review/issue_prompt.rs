use super::*;

/// Tests issuing a review prompt.
///
/// Verifies the prompt is posted to the invoking channel with the session ID and that
/// both prompt message IDs are recorded on the session.
///
/// Expected: Ok(session) bound to the target user
#[tokio::test]
async fn posts_prompt_and_records_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let session = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await
        .unwrap();

    assert_eq!(session.target_user_id, TARGET_USER_ID);
    assert_eq!(session.channel_id, PROMPT_CHANNEL_ID);
    assert_eq!(session.message_ids, vec![1000, 1001]);
    assert_eq!(
        delivery.sent(),
        vec![Sent::Prompt {
            channel_id: PROMPT_CHANNEL_ID,
            target_user_id: TARGET_USER_ID,
            session_id: session.id.clone(),
        }]
    );
    assert_eq!(sessions.get(&session.id).await, Some(session));

    Ok(())
}

/// Tests that a prompt can be issued before any review channel is configured.
///
/// The channel is only resolved on submission.
///
/// Expected: Ok(session)
#[tokio::test]
async fn does_not_require_review_channel() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a failed prompt post leaves no session behind.
///
/// Expected: Err(Discord), session removed
#[tokio::test]
async fn discards_session_when_posting_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let channels = ReviewChannelRepository::new(test.channel_file());
    let sessions = ReviewSessionRepository::new(None);
    let delivery = RecordingDelivery::new().with_failing_prompt();
    let service = ReviewService::new(&channels, &sessions, &delivery);

    let result = service
        .issue_prompt(GUILD_ID, PROMPT_CHANNEL_ID, TARGET_USER_ID)
        .await;

    assert!(matches!(result, Err(ReviewError::Discord(_))));
    assert!(delivery.sent().is_empty());

    let attempted = delivery.failed_prompts();
    assert_eq!(attempted.len(), 1);
    assert!(sessions.get(&attempted[0]).await.is_none());

    Ok(())
}
