use super::*;

/// Tests listing the tasks of one game only.
///
/// Expected: tasks of the game ordered by id, tasks of other games excluded
#[tokio::test]
async fn lists_members_of_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let first = factory::create_task(db).await?;
    let second = factory::create_task(db).await?;
    let unrelated = factory::create_task(db).await?;

    factory::game::add_task(db, game.id, second.id).await?;
    factory::game::add_task(db, game.id, first.id).await?;
    factory::game::add_task(db, other_game.id, unrelated.id).await?;

    let repo = MembershipRepository::<GameTasks>::new(db);
    let tasks = repo.members(game.id).await?;

    assert_eq!(
        tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests listing an empty roster.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_collection_has_no_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let members = MembershipRepository::<TeamUsers>::new(db)
        .members(team.id)
        .await?;

    assert!(members.is_empty());

    Ok(())
}
