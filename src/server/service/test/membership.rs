use sea_orm::{ConnectionTrait, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::membership::{GameTasks, TeamUsers},
    error::{membership::MembershipError, AppError},
    service::membership::MembershipService,
};

/// Tests that a user joins a team once and a second add conflicts.
///
/// Expected: Ok then Err(MembershipError::AlreadyMember)
#[tokio::test]
async fn second_add_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let user = factory::create_user(db).await?;
    let service = MembershipService::<TeamUsers>::new(db);

    service.add(team.id, user.id).await?;
    let result = service.add(team.id, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::AlreadyMember { member_id, .. })) if member_id == user.id
    ));

    Ok(())
}

/// Tests that a member is removed once and a second removal is not found.
///
/// Expected: Ok then Err(MembershipError::NotMember)
#[tokio::test]
async fn second_remove_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team) = factory::helpers::create_team_with_member(db).await?;
    let service = MembershipService::<TeamUsers>::new(db);

    service.remove(team.id, user.id).await?;
    let result = service.remove(team.id, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::NotMember { .. }))
    ));
    assert!(service.members(team.id).await?.is_empty());

    Ok(())
}

/// Tests adding a task id that does not exist.
///
/// Expected: Err(MembershipError::MemberNotFound)
#[tokio::test]
async fn missing_member_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let result = MembershipService::<GameTasks>::new(db)
        .add(game.id, 999)
        .await;

    assert_eq!(
        result.err().and_then(|e| match e {
            AppError::MembershipErr(err) => Some(err),
            _ => None,
        }),
        Some(MembershipError::MemberNotFound {
            member: "task",
            member_id: 999,
        })
    );

    Ok(())
}

/// Tests that an existing link is reported before a missing member.
///
/// Expected: Err(MembershipError::AlreadyMember) even after the task row is gone
#[tokio::test]
async fn conflict_checked_before_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let task = factory::create_task(db).await?;
    let service = MembershipService::<GameTasks>::new(db);
    service.add(game.id, task.id).await?;

    // Disable cascades so the link outlives its task row
    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::Task::delete_by_id(task.id).exec(db).await?;

    let result = service.add(game.id, task.id).await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::AlreadyMember { .. }))
    ));

    Ok(())
}

/// Tests that an exclusive add refuses a member of another collection.
///
/// Expected: Err(MembershipError::MemberTaken)
#[tokio::test]
async fn exclusive_add_refuses_taken_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_team_with_member(db).await?;
    let other_team = factory::create_team(db).await?;

    let result = MembershipService::<TeamUsers>::new(db)
        .add_exclusive(other_team.id, user.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::MemberTaken { .. }))
    ));

    Ok(())
}
