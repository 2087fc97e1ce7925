use super::*;

/// Tests appending messages and reading them back oldest first.
///
/// Expected: Ok with messages in posting order and the admin flag kept
#[tokio::test]
async fn appends_messages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (ticket, first) = factory::helpers::create_ticket_with_message(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let reply = repo
        .add_message(AddTicketMessageParam {
            ticket_id: ticket.id,
            from_admin: true,
            content: None,
            image: Some("https://cdn.example.com/receipt.png".to_string()),
        })
        .await?;

    assert!(reply.from_admin);
    assert!(reply.content.is_none());

    let messages = repo.get_messages(ticket.id).await?;
    let ids: Vec<_> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, [first.id, reply.id]);

    Ok(())
}

/// Tests that messages of other tickets are not returned.
///
/// Expected: Ok with only the requested ticket's messages
#[tokio::test]
async fn scopes_messages_to_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (ticket, _) = factory::helpers::create_ticket_with_message(db, user.id).await?;
    factory::helpers::create_ticket_with_message(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let messages = repo.get_messages(ticket.id).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].ticket_id, ticket.id);

    Ok(())
}
