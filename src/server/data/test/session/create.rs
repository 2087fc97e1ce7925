use super::*;

/// Tests storing a session for a user.
///
/// Expected: Ok(Session) carrying the token, user and expiry provided
#[tokio::test]
async fn creates_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::days(30);

    let repo = SessionRepository::new(db);
    let session = repo
        .create(CreateSessionParam {
            token: "abc123".to_string(),
            user_id: user.id,
            expires_at,
        })
        .await?;

    assert_eq!(session.token, "abc123");
    assert_eq!(session.user_id, user.id);
    assert!((session.expires_at - expires_at).num_seconds().abs() < 1);
    assert!(!session.is_expired(Utc::now()));

    Ok(())
}

/// Tests that tokens are unique across sessions.
///
/// Expected: Err(DbErr) when inserting a duplicate token
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .token("taken")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let result = repo
        .create(CreateSessionParam {
            token: "taken".to_string(),
            user_id: user.id,
            expires_at: Utc::now() + Duration::days(1),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
