use super::*;

/// Tests purging expired sessions while keeping live ones.
///
/// Expected: Ok(1) with only the live session remaining
#[tokio::test]
async fn removes_only_expired_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let live = factory::create_session(db, user.id).await?;
    factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let removed = repo.delete_expired().await?;

    assert_eq!(removed, 1);
    let remaining = entity::prelude::Session::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);

    Ok(())
}
