use super::*;

/// Tests opening a ticket.
///
/// Expected: Ok(Ticket) with status Open and no messages
#[tokio::test]
async fn creates_open_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TicketRepository::new(db);
    let ticket = repo
        .create(&CreateTicketParam {
            user_id: user.id,
            subject: "Delivery question".to_string(),
            content: Some("When will my horse arrive?".to_string()),
            image: None,
        })
        .await?;

    assert_eq!(ticket.user_id, user.id);
    assert_eq!(ticket.subject, "Delivery question");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(repo.get_messages(ticket.id).await?.is_empty());

    Ok(())
}
