//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team together with one member on its roster.
///
/// The member also owns the team.
///
/// # Returns
/// - `Ok((user, team))` - The member and the team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::TeamFactory::new(db)
        .owner(user.id)
        .build()
        .await?;
    crate::factory::team::add_member(db, team.id, user.id).await?;

    Ok((user, team))
}

/// Creates a game with one registered team and an open chat between them.
///
/// # Returns
/// - `Ok((member, team, game, chat))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_chat(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::game::Model,
        entity::chat::Model,
    ),
    DbErr,
> {
    let (user, team) = create_team_with_member(db).await?;
    let game = crate::factory::game::create_game(db).await?;
    crate::factory::game::add_team(db, game.id, team.id).await?;
    let chat = crate::factory::chat::create_chat(db, game.id, team.id).await?;

    Ok((user, team, game, chat))
}
