//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique, well-formed mobile number (`09` followed by nine digits).
pub fn next_phone_number() -> String {
    format!("09{:09}", next_id() % 1_000_000_000)
}

/// Creates a ticket owned by `user_id` with a single text message.
///
/// # Returns
/// - `Ok((ticket, message))` - The created ticket and its first message
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_message(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::ticket::Model, entity::ticket_message::Model), DbErr> {
    let ticket = crate::factory::ticket::create_ticket(db, user_id).await?;
    let message = crate::factory::ticket_message::create_ticket_message(db, ticket.id).await?;

    Ok((ticket, message))
}

/// Creates a user together with a live session.
///
/// # Returns
/// - `Ok((user, session))` - The created user and session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_session(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::session::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::session::create_session(db, user.id).await?;

    Ok((user, session))
}
