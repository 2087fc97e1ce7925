use super::*;

/// Tests detecting a page address held by another horse.
///
/// Expected: true for other horses, false when excluding the owner
#[tokio::test]
async fn detects_url_owned_by_other_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::horse::HorseFactory::new(db)
        .url(Some("spirit"))
        .build()
        .await?;

    let repo = HorseRepository::new(db);

    assert!(repo.url_in_use("spirit", None).await?);
    assert!(repo.url_in_use("spirit", Some(owner.id + 1)).await?);
    assert!(!repo.url_in_use("spirit", Some(owner.id)).await?);
    assert!(!repo.url_in_use("free", None).await?);

    Ok(())
}
