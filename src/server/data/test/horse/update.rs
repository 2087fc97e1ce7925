use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok(Some(Horse)) with the new price and the old name and url
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::horse::HorseFactory::new(db)
        .name("Storm")
        .url(Some("storm"))
        .price(100)
        .build()
        .await?;

    let repo = HorseRepository::new(db);
    let horse = repo
        .update(UpdateHorseParam {
            id: stored.id,
            price: Some(150),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(horse.name, "Storm");
    assert_eq!(horse.url.as_deref(), Some("storm"));
    assert_eq!(horse.price, 150);
    assert!(horse.updated_at >= stored.updated_at);

    Ok(())
}

/// Tests clearing the page address with `Some(None)`.
///
/// Expected: Ok(Some(Horse)) with `url` None
#[tokio::test]
async fn clears_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_horse(db).await?;

    let repo = HorseRepository::new(db);
    let horse = repo
        .update(UpdateHorseParam {
            id: stored.id,
            url: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(horse.url.is_none());

    Ok(())
}

/// Tests updating a horse that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HorseRepository::new(db);
    let result = repo
        .update(UpdateHorseParam {
            id: 42,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
