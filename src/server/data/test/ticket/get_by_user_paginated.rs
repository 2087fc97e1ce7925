use super::*;

/// Tests that a user only sees their own tickets, newest first.
///
/// Expected: Ok with the user's tickets in reverse creation order
#[tokio::test]
async fn returns_only_users_tickets_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let older = factory::create_ticket(db, user.id).await?;
    factory::create_ticket(db, other.id).await?;
    let newer = factory::create_ticket(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let (tickets, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 2);
    let ids: Vec<_> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, [newer.id, older.id]);

    Ok(())
}
