use super::*;

/// Tests the first verification of a phone number registering a user.
///
/// Expected: Ok(User) and exactly one user row
#[tokio::test]
async fn creates_user_for_new_phone_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_or_create_by_phone_number("09121234567").await?;

    assert_eq!(user.phone_number, "09121234567");
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a returning phone number reuses the existing user.
///
/// Expected: Ok(User) with the original ID and no new row
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .phone_number("09121234567")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_or_create_by_phone_number("09121234567").await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
