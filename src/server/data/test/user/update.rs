use super::*;

/// Tests that only provided fields change.
///
/// Expected: name and hash replaced, email kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Olga".to_string()),
                ..Default::default()
            },
            Some("$argon2id$other".to_string()),
        )
        .await?;

    assert_eq!(updated.name, "Olga");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.hashed_password, "$argon2id$other");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParam::default(), None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
