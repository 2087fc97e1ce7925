use super::*;

/// Tests changing a ticket's status.
///
/// Expected: Ok(()) with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = factory::create_ticket(db, user.id).await?;

    let repo = TicketRepository::new(db);
    repo.set_status(stored.id, TicketStatus::Closed).await?;

    let ticket = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(ticket.status, TicketStatus::Closed);
    assert!(ticket.updated_at >= stored.updated_at);

    Ok(())
}
