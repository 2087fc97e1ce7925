use super::*;

/// Tests finding a horse by its page address.
///
/// Expected: Ok(Some(Horse)) for a stored url and Ok(None) otherwise
#[tokio::test]
async fn finds_horse_by_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::horse::HorseFactory::new(db)
        .url(Some("black-beauty"))
        .build()
        .await?;

    let repo = HorseRepository::new(db);
    let found = repo.find_by_url("black-beauty").await?;

    assert_eq!(found.map(|h| h.id), Some(stored.id));
    assert!(repo.find_by_url("white-beauty").await?.is_none());

    Ok(())
}
