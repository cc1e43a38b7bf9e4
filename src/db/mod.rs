pub mod pool;
pub mod schema;
pub mod users;

use sqlx::SqlitePool;
use std::path::Path;

pub use pool::create_pool;

/// Database handle type (a cloneable connection pool shared across handlers)
pub type Db = SqlitePool;

/// Open or create the SQLite database at the given path
///
/// Creates the `users` table on first run. Any failure here is fatal to startup.
pub async fn open_database(path: impl AsRef<Path>) -> Result<Db, sqlx::Error> {
    let path = path.as_ref();
    tracing::info!("Opening database at: {:?}", path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    let pool = create_pool(path).await?;
    schema::init_schema(&pool).await?;

    tracing::info!("Database initialized successfully");

    Ok(pool)
}
