use super::*;

/// Tests updating statistics without touching the name.
///
/// Expected: counters replaced, name kept
#[tokio::test]
async fn updates_statistics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let updated = TeamRepository::new(db)
        .update(
            team.id,
            UpdateTeamParam {
                games_played: Some(4),
                win_games: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, team.name);
    assert_eq!(updated.games_played, 4);
    assert_eq!(updated.win_games, 1);

    Ok(())
}

/// Tests deleting a team twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_reports_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let repo = TeamRepository::new(db);

    assert!(repo.delete(team.id).await?);
    assert!(!repo.delete(team.id).await?);

    Ok(())
}
