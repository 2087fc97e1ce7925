use super::*;

/// Tests recording a wrong guess against a pending code.
///
/// Expected: Ok(attempts + 1) persisted to the row
#[tokio::test]
async fn increments_attempt_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db)
        .phone_number("09121234567")
        .attempts(2)
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let otp = repo.find_by_phone_number("09121234567").await?.unwrap();
    let attempts = repo.increment_attempts(&otp).await?;

    assert_eq!(attempts, 3);
    let stored = repo.find_by_phone_number("09121234567").await?.unwrap();
    assert_eq!(stored.attempts, 3);

    Ok(())
}
