use sea_orm::EntityTrait;

use super::*;

/// Tests removing a horse.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_horse_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_horse(db).await?;

    let repo = HorseRepository::new(db);
    assert!(repo.delete(stored.id).await?);
    assert!(!repo.delete(stored.id).await?);
    assert!(entity::prelude::Horse::find_by_id(stored.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
