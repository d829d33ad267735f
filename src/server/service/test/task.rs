use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, model::task::UpdateTaskParam, service::task::TaskService};

/// Tests a partial update.
///
/// Expected: only the given fields change
#[tokio::test]
async fn update_keeps_unset_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db)
        .owner(owner.id)
        .level(2)
        .build()
        .await?;

    let updated = TaskService::new(db)
        .update(
            task.id,
            UpdateTaskParam {
                answer: Some("lantern".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.answer, "lantern");
    assert_eq!(updated.level, 2);
    assert_eq!(updated.place, task.place);

    Ok(())
}

/// Tests listing tasks per owner.
///
/// Expected: own tasks only, empty for a user with none, NotFound for an unknown user
#[tokio::test]
async fn get_by_owner_lists_own_tasks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let idle = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db)
        .owner(owner.id)
        .build()
        .await?;

    let service = TaskService::new(db);

    let tasks = service.get_by_owner(owner.id).await?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task.id);

    assert!(service.get_by_owner(idle.id).await?.is_empty());
    assert!(matches!(
        service.get_by_owner(idle.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a task twice.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_task() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::create_task(db).await?;
    let service = TaskService::new(db);

    service.delete(task.id).await?;

    assert!(matches!(
        service.delete(task.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get(task.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
