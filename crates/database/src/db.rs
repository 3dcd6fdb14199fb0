use sea_orm::{Database, DatabaseConnection, DbErr};

/// Creates a database connection against the given Postgres URL.
///
/// The URL comes from the process configuration built in `main`; nothing
/// below this layer reads the environment.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
