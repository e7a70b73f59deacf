use super::*;

/// Tests removing a session.
///
/// Expected: Some(session) once, then None
#[tokio::test]
async fn removes_session() {
    let repo = ReviewSessionRepository::new(None);
    let session = repo.create(param(42)).await;

    assert_eq!(repo.remove(&session.id).await, Some(session.clone()));
    assert!(repo.remove(&session.id).await.is_none());
    assert!(repo.get(&session.id).await.is_none());
}
