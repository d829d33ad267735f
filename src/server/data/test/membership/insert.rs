use super::*;

/// Tests inserting and then finding a roster link.
///
/// Expected: contains and is_linked both true after insert
#[tokio::test]
async fn inserts_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_team(db).await?;
    let repo = MembershipRepository::<TeamUsers>::new(db);

    assert!(!repo.contains(team.id, user.id).await?);

    repo.insert(team.id, user.id).await?;

    assert!(repo.contains(team.id, user.id).await?);
    assert!(repo.is_linked(user.id).await?);

    Ok(())
}

/// Tests that a duplicate link is rejected by the store.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let task = factory::create_task(db).await?;
    let repo = MembershipRepository::<GameTasks>::new(db);

    repo.insert(game.id, task.id).await?;
    let result = repo.insert(game.id, task.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests linking a member row that does not exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = MembershipRepository::<GameTeams>::new(db);

    assert!(!repo.member_exists(999).await?);

    let result = repo.insert(game.id, 999).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests deleting a link twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team) = factory::helpers::create_team_with_member(db).await?;
    let repo = MembershipRepository::<TeamUsers>::new(db);

    assert!(repo.delete(team.id, user.id).await?);
    assert!(!repo.delete(team.id, user.id).await?);
    assert!(!repo.is_linked(user.id).await?);

    Ok(())
}
