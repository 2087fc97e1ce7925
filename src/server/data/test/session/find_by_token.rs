use super::*;

/// Tests finding a session by its token.
///
/// Expected: Ok(Some(Session)) for the matching row
#[tokio::test]
async fn finds_session_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = factory::session::SessionFactory::new(db, user.id)
        .token("lookup-token")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_by_token("lookup-token").await?;

    assert!(session.is_some());
    let session = session.unwrap();
    assert_eq!(session.id, stored.id);
    assert_eq!(session.user_id, user.id);

    Ok(())
}

/// Tests that expired sessions are still returned so callers can report expiry.
///
/// Expected: Ok(Some(Session)) with `is_expired` true
#[tokio::test]
async fn returns_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .token("old-token")
        .expired()
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_by_token("old-token").await?.unwrap();

    assert!(session.is_expired(Utc::now()));

    Ok(())
}

/// Tests looking up an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let session = repo.find_by_token("missing").await?;

    assert!(session.is_none());

    Ok(())
}
