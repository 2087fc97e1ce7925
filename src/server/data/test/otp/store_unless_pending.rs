use super::*;

fn param(code: &str) -> StoreOtpParam {
    StoreOtpParam {
        phone_number: "09121234567".to_string(),
        code: code.to_string(),
        expires_at: Utc::now() + Duration::minutes(2),
    }
}

/// Tests storing a code for a phone number with no pending code.
///
/// Expected: Ok(Some(PendingOtp)) with zero attempts
#[tokio::test]
async fn stores_new_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    let otp = repo
        .store_unless_pending(param("654321"), Utc::now())
        .await?
        .unwrap();

    assert_eq!(otp.phone_number, "09121234567");
    assert!(otp.matches("654321"));
    assert_eq!(otp.attempts, 0);

    Ok(())
}

/// Tests that a new code replaces an expired one and resets attempts.
///
/// Expected: Ok(Some(PendingOtp)) with the new code, zero attempts and a single row
#[tokio::test]
async fn replaces_expired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db)
        .phone_number("09121234567")
        .code("111111")
        .attempts(3)
        .expired()
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let stored = repo.store_unless_pending(param("222222"), Utc::now()).await?;

    assert!(stored.is_some());
    let stored = repo.find_by_phone_number("09121234567").await?.unwrap();
    assert!(stored.matches("222222"));
    assert_eq!(stored.attempts, 0);
    assert!(!stored.is_expired(Utc::now()));
    assert_eq!(entity::prelude::Otp::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an unexpired code is left in place.
///
/// Expected: Ok(None) and the original code still stored
#[tokio::test]
async fn keeps_unexpired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db)
        .phone_number("09121234567")
        .code("111111")
        .attempts(2)
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let stored = repo.store_unless_pending(param("222222"), Utc::now()).await?;

    assert!(stored.is_none());
    let pending = repo.find_by_phone_number("09121234567").await?.unwrap();
    assert!(pending.matches("111111"));
    assert_eq!(pending.attempts, 2);

    Ok(())
}
