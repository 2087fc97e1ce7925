use super::*;

/// Tests paging through horses ordered by name.
///
/// Expected: Ok with names in alphabetical order and the total horse count
#[tokio::test]
async fn returns_page_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alpha", "Echo", "Bravo", "Delta"] {
        factory::horse::HorseFactory::new(db).name(name).build().await?;
    }

    let repo = HorseRepository::new(db);

    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    let names: Vec<_> = first.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Bravo"]);

    let (last, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].name, "Echo");

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no horses and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Horse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_horse(db).await?;

    let repo = HorseRepository::new(db);
    let (horses, total) = repo.get_all_paginated(5, 10).await?;

    assert!(horses.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
