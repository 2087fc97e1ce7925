use super::*;

/// Tests the admin listing across every user.
///
/// Expected: Ok with a page of tickets and the total across all users
#[tokio::test]
async fn returns_tickets_for_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_ticket(db, first.id).await?;
    }
    factory::create_ticket(db, second.id).await?;

    let repo = TicketRepository::new(db);
    let (page, total) = repo.get_all_paginated(0, 3).await?;

    assert_eq!(total, 4);
    assert_eq!(page.len(), 3);

    let (rest, _) = repo.get_all_paginated(1, 3).await?;
    assert_eq!(rest.len(), 1);

    Ok(())
}
