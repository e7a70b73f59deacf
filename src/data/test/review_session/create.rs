use super::*;

/// Tests creating a review session.
///
/// Verifies the generated ID is alphanumeric with the expected length and that the
/// session starts without prompt messages.
///
/// Expected: session stored with the given binding
#[tokio::test]
async fn creates_session() {
    let repo = ReviewSessionRepository::new(None);

    let session = repo.create(param(42)).await;

    assert_eq!(session.id.len(), SESSION_ID_LENGTH);
    assert!(session.id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(session.guild_id, 1);
    assert_eq!(session.channel_id, 2);
    assert_eq!(session.target_user_id, 42);
    assert!(session.message_ids.is_empty());
    assert_eq!(repo.get(&session.id).await, Some(session));
}

/// Tests that concurrent prompts get distinct sessions.
///
/// Expected: different IDs, each bound to its own target
#[tokio::test]
async fn creates_distinct_sessions() {
    let repo = ReviewSessionRepository::new(None);

    let first = repo.create(param(42)).await;
    let second = repo.create(param(43)).await;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get(&first.id).await.map(|s| s.target_user_id), Some(42));
    assert_eq!(repo.get(&second.id).await.map(|s| s.target_user_id), Some(43));
}

/// Tests that creating a session prunes expired ones.
///
/// With a zero timeout every existing session is expired by the time the next is created.
///
/// Expected: the earlier session is gone
#[tokio::test]
async fn prunes_expired_sessions() {
    let repo = ReviewSessionRepository::new(Some(Duration::ZERO));

    let first = repo.create(param(42)).await;
    repo.create(param(43)).await;

    assert!(repo.remove(&first.id).await.is_none());
}

/// Tests the cap on open sessions without a timeout.
///
/// Verifies that prompts nobody completes cannot grow the repository without bound.
///
/// Expected: oldest session evicted, newest sessions kept
#[tokio::test]
async fn evicts_oldest_session_at_capacity() {
    let repo = ReviewSessionRepository::new(None);

    let oldest = repo.create(param(1)).await;
    tokio::time::sleep(Duration::from_millis(2)).await;
    let mut newest = oldest.clone();
    for user_id in 2..=(MAX_SESSIONS as u64 + 1) {
        newest = repo.create(param(user_id)).await;
    }

    assert!(repo.get(&oldest.id).await.is_none());
    assert!(repo.get(&newest.id).await.is_some());
}
