use super::*;

/// Tests discarding a pending code.
///
/// Expected: Ok(()) and no code left for the phone number
#[tokio::test]
async fn deletes_pending_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let otp = factory::create_otp(db, "09121234567").await?;

    let repo = OtpRepository::new(db);
    repo.delete(otp.id).await?;

    assert!(repo.find_by_phone_number("09121234567").await?.is_none());

    Ok(())
}
