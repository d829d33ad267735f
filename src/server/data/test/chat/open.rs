use super::*;

/// Tests opening the first chat of a team in a game.
///
/// Expected: a new active chat for the pair
#[tokio::test]
async fn creates_active_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let game = factory::create_game(db).await?;
    let repo = ChatRepository::new(db);

    let chat = repo.open(game.id, team.id).await?;

    assert!(chat.is_active);
    assert_eq!(chat.game_id, game.id);
    assert_eq!(chat.team_id, team.id);
    assert_eq!(repo.find_active_by_team(team.id).await?, Some(chat));

    Ok(())
}

/// Tests that opening a chat in a second game closes the first.
///
/// Expected: exactly one active chat for the team, the newest one
#[tokio::test]
async fn deactivates_other_chats_of_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let first_game = factory::create_game(db).await?;
    let second_game = factory::create_game(db).await?;
    let repo = ChatRepository::new(db);

    let first = repo.open(first_game.id, team.id).await?;
    let second = repo.open(second_game.id, team.id).await?;

    assert!(!repo.find_by_id(first.id).await?.unwrap().is_active);
    assert_eq!(
        repo.find_active_by_team(team.id).await?.map(|c| c.id),
        Some(second.id)
    );

    Ok(())
}

/// Tests that reopening a closed chat reuses its row and history.
///
/// Expected: same chat id, active again
#[tokio::test]
async fn reopens_existing_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let game = factory::create_game(db).await?;
    let repo = ChatRepository::new(db);

    let chat = repo.open(game.id, team.id).await?;
    let closed = repo.deactivate(game.id, team.id).await?.unwrap();
    assert_eq!(closed.id, chat.id);
    assert!(!closed.is_active);
    assert!(repo.find_active_by_team(team.id).await?.is_none());

    let reopened = repo.open(game.id, team.id).await?;

    assert_eq!(reopened.id, chat.id);
    assert!(reopened.is_active);

    Ok(())
}

/// Tests deactivating a chat that is not active.
///
/// Expected: Ok(None)
#[tokio::test]
async fn deactivate_reports_no_active_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let game = factory::create_game(db).await?;

    assert!(ChatRepository::new(db)
        .deactivate(game.id, team.id)
        .await?
        .is_none());

    Ok(())
}
