use super::*;

/// Tests creating a team with zeroed statistics.
///
/// Expected: Ok(Team) owned by the creator, findable by name
#[tokio::test]
async fn creates_team_owned_by_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = TeamRepository::new(db);

    let team = repo
        .create(CreateTeamParam {
            name: "Owls".to_string(),
            owner_id: owner.id,
        })
        .await?;

    assert_eq!(team.owner_id, Some(owner.id));
    assert_eq!(team.games_played, 0);
    assert_eq!(repo.find_by_name("Owls").await?, Some(team));

    Ok(())
}

/// Tests that deleting the owner keeps the team but clears its owner.
///
/// Expected: owner_id is None after the owner is deleted
#[tokio::test]
async fn owner_deletion_clears_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let team = factory::team::TeamFactory::new(db)
        .owner(owner.id)
        .build()
        .await?;

    crate::server::data::user::UserRepository::new(db)
        .delete(owner.id)
        .await?;

    let team = TeamRepository::new(db).find_by_id(team.id).await?.unwrap();
    assert_eq!(team.owner_id, None);

    Ok(())
}
