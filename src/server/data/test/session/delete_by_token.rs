use super::*;

/// Tests deleting a session by token.
///
/// Expected: Ok(true) and the session no longer found
#[tokio::test]
async fn deletes_matching_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .token("logout-token")
        .build()
        .await?;
    factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_token("logout-token").await?;

    assert!(deleted);
    assert!(repo.find_by_token("logout-token").await?.is_none());
    assert_eq!(entity::prelude::Session::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting with a token that matches nothing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_token("missing").await?;

    assert!(!deleted);

    Ok(())
}
