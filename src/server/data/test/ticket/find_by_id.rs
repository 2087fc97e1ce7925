use super::*;

/// Tests loading a ticket by ID.
///
/// Expected: Ok(Some(Ticket)) with the parsed status
#[tokio::test]
async fn finds_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = factory::ticket::TicketFactory::new(db, user.id)
        .status("answered")
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let ticket = repo.find_by_id(stored.id).await?.unwrap();

    assert_eq!(ticket.status, TicketStatus::Answered);
    assert!(repo.find_by_id(stored.id + 100).await?.is_none());

    Ok(())
}

/// Tests that an unknown stored status surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = factory::ticket::TicketFactory::new(db, user.id)
        .status("archived")
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let result = repo.find_by_id(stored.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
