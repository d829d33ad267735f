use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::admin::code::AdminCodeService,
};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Generates and logs an admin code when no superuser exists.
///
/// Any authenticated user can redeem the code through `POST /api/auth/admin-code`
/// within its TTL to become a superuser.
///
/// # Returns
/// - `Ok(Some(code))` - No superuser existed, a code was generated
/// - `Ok(None)` - A superuser already exists
/// - `Err(AppError::DbErr)` - Database error during the check
pub async fn check_for_superuser(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<Option<String>, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.superuser_exists().await? {
        return Ok(None);
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No superuser found. Redeem this code via POST /api/auth/admin-code within 60 seconds: {}",
        code
    );

    Ok(Some(code))
}
