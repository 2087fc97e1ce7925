use super::*;

/// Tests listing a horse with a page address.
///
/// Expected: Ok(Horse) with all provided fields
#[tokio::test]
async fn creates_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HorseRepository::new(db);
    let horse = repo
        .create(CreateHorseParam {
            name: "Silver Arrow".to_string(),
            url: Some("silver-arrow".to_string()),
            description: Some("Grey Arabian mare".to_string()),
            price: 25_000,
        })
        .await?;

    assert_eq!(horse.name, "Silver Arrow");
    assert_eq!(horse.url.as_deref(), Some("silver-arrow"));
    assert_eq!(horse.description.as_deref(), Some("Grey Arabian mare"));
    assert_eq!(horse.price, 25_000);

    Ok(())
}

/// Tests that several horses may have no page address.
///
/// Expected: Ok for both inserts with `url` None
#[tokio::test]
async fn allows_multiple_horses_without_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HorseRepository::new(db);
    for name in ["First", "Second"] {
        let horse = repo
            .create(CreateHorseParam {
                name: name.to_string(),
                url: None,
                description: None,
                price: 0,
            })
            .await?;
        assert!(horse.url.is_none());
    }

    Ok(())
}

/// Tests the unique constraint on page addresses.
///
/// Expected: Err(DbErr) for the duplicate url
#[tokio::test]
async fn rejects_duplicate_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::horse::HorseFactory::new(db)
        .url(Some("taken"))
        .build()
        .await?;

    let repo = HorseRepository::new(db);
    let result = repo
        .create(CreateHorseParam {
            name: "Copy".to_string(),
            url: Some("taken".to_string()),
            description: None,
            price: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
