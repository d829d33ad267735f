use super::*;

/// Tests detection on an empty database (first start).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).superuser_exists().await?);

    Ok(())
}

/// Tests that only regular users do not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    assert!(!UserRepository::new(db).superuser_exists().await?);

    Ok(())
}

/// Tests that promoting a user is picked up.
///
/// Expected: Ok(true) after set_superuser
#[tokio::test]
async fn returns_true_after_promotion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_superuser(user.id, true).await?;

    assert!(repo.superuser_exists().await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_superuser);

    Ok(())
}
