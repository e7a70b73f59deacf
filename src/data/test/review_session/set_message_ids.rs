use super::*;

/// Tests recording prompt message IDs.
///
/// Expected: IDs stored in posting order
#[tokio::test]
async fn records_message_ids() {
    let repo = ReviewSessionRepository::new(None);
    let session = repo.create(param(42)).await;

    let updated = repo.set_message_ids(&session.id, vec![10, 11]).await;

    assert_eq!(updated.map(|s| s.message_ids), Some(vec![10, 11]));
    assert_eq!(
        repo.get(&session.id).await.map(|s| s.message_ids),
        Some(vec![10, 11])
    );
}

/// Tests recording message IDs for an unknown session.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let repo = ReviewSessionRepository::new(None);

    assert!(repo.set_message_ids("unknown", vec![10]).await.is_none());
}
