use super::*;

/// Tests listing active chats with their team names.
///
/// Expected: only the active chat, carrying the team's name
#[tokio::test]
async fn lists_only_active_chats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, _, chat) = factory::helpers::create_active_chat(db).await?;
    let other_team = factory::create_team(db).await?;
    let game = factory::create_game(db).await?;
    factory::chat::ChatFactory::new(db, game.id, other_team.id)
        .active(false)
        .build()
        .await?;

    let active = ChatRepository::new(db).get_active_with_team().await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].chat.id, chat.id);
    assert_eq!(active[0].team_name, team.name);

    Ok(())
}
