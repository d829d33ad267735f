use super::*;

/// Tests resolving the team a user plays for.
///
/// Expected: Ok(Some(team))
#[tokio::test]
async fn finds_team_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team) = factory::helpers::create_team_with_member(db).await?;

    let found = TeamRepository::new(db).find_by_member(user.id).await?;

    assert_eq!(found.map(|t| t.id), Some(team.id));

    Ok(())
}

/// Tests a user without a team.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_team(db).await?;

    assert!(TeamRepository::new(db)
        .find_by_member(user.id)
        .await?
        .is_none());

    Ok(())
}
