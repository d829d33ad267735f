use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::user::{GetAllUsersParam, UpdateUserParam},
    service::user::{UserService, MAX_PER_PAGE},
    util::password,
};

/// Tests changing email to one owned by another account.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn email_taken_by_other_user_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some(other.email),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests changing phone number to one owned by another account.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn phone_taken_by_other_user_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                phone_number: Some(other.phone_number),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a new password is checked against the new email and stored hashed.
///
/// Expected: BadRequest when the password contains the new email, hash stored otherwise
#[tokio::test]
async fn password_change_is_checked_and_hashed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let result = service
        .update(
            user.id,
            UpdateUserParam {
                email: Some("owl@example.com".to_string()),
                password: Some("my-owl@example.com-pw".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let updated = service
        .update(
            user.id,
            UpdateUserParam {
                password: Some("lantern-and-key".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert!(password::verify("lantern-and-key", &updated.hashed_password).await?);

    Ok(())
}

/// Tests that an oversized page is clamped.
///
/// Expected: per_page reported as the maximum
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let page = UserService::new(db)
        .get_all(GetAllUsersParam {
            page: 0,
            per_page: 10_000,
        })
        .await?;

    assert_eq!(page.per_page, MAX_PER_PAGE);
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Tests deleting a user twice.
///
/// Expected: Ok then Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    service.delete(user.id).await?;

    assert!(matches!(
        service.delete(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
