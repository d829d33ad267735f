use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::team::{CreateTeamParam, UpdateTeamParam},
    service::team::TeamService,
};

/// Tests that the creator owns the team but is not on the roster.
///
/// Expected: owner set, roster empty
#[tokio::test]
async fn creator_owns_but_does_not_join() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let service = TeamService::new(db);

    let team = service
        .create(CreateTeamParam {
            name: "Owls".to_string(),
            owner_id: owner.id,
        })
        .await?;

    assert_eq!(team.owner_id, Some(owner.id));
    assert!(service.members(team.id).await?.is_empty());

    Ok(())
}

/// Tests creating a second team with a taken name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::team::TeamFactory::new(db).name("Owls").build().await?;

    let result = TeamService::new(db)
        .create(CreateTeamParam {
            name: "Owls".to_string(),
            owner_id: owner.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests renaming a team to a name used by another team.
///
/// Expected: Err(AppError::Conflict); renaming to its own name is fine
#[tokio::test]
async fn rename_checks_other_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db).name("Owls").build().await?;
    factory::team::TeamFactory::new(db).name("Foxes").build().await?;
    let service = TeamService::new(db);

    let result = service
        .update(
            team.id,
            UpdateTeamParam {
                name: Some("Foxes".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let same = service
        .update(
            team.id,
            UpdateTeamParam {
                name: Some("Owls".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(same.name, "Owls");

    Ok(())
}

/// Tests adding a member and reading back the roster.
///
/// Expected: roster contains the user; is_member reports it
#[tokio::test]
async fn add_member_returns_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let user = factory::create_user(db).await?;
    let service = TeamService::new(db);

    let roster = service.add_member(team.id, user.id).await?;

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, user.id);
    assert!(service.is_member(team.id, user.id).await?);
    assert_eq!(
        service.get_by_member(user.id).await?.map(|t| t.id),
        Some(team.id)
    );

    Ok(())
}

/// Tests fetching a team that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db).get(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
