pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_users_table;
mod m20261019_000002_create_teams_table;
mod m20261019_000003_create_team_users_table;
mod m20261019_000004_create_games_table;
mod m20261019_000005_create_tasks_table;
mod m20261019_000006_create_game_tasks_table;
mod m20261019_000007_create_game_teams_table;
mod m20261019_000008_create_chats_table;
mod m20261019_000009_create_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_users_table::Migration),
            Box::new(m20261019_000002_create_teams_table::Migration),
            Box::new(m20261019_000003_create_team_users_table::Migration),
            Box::new(m20261019_000004_create_games_table::Migration),
            Box::new(m20261019_000005_create_tasks_table::Migration),
            Box::new(m20261019_000006_create_game_tasks_table::Migration),
            Box::new(m20261019_000007_create_game_teams_table::Migration),
            Box::new(m20261019_000008_create_chats_table::Migration),
            Box::new(m20261019_000009_create_messages_table::Migration),
        ]
    }
}
