use super::*;

/// Tests creating a new account with default flags.
///
/// Expected: Ok(User) that is active, not a superuser and not verified
#[tokio::test]
async fn creates_active_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("ivan@example.com", "79990000001"))
        .await?;

    assert_eq!(user.email, "ivan@example.com");
    assert_eq!(user.games_played, 0);
    assert!(user.is_active);
    assert!(!user.is_superuser);
    assert!(!user.is_verified);

    let found = repo.find_by_email("ivan@example.com").await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("ivan@example.com", "79990000001"))
        .await?;

    let result = repo
        .create(create_param("ivan@example.com", "79990000002"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that the phone number column is unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_phone_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("ivan@example.com", "79990000001"))
        .await?;

    let result = repo
        .create(create_param("olga@example.com", "79990000001"))
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
