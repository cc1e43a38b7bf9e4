use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{NewUser, User};

/// Insert a user and return the id assigned by the store
///
/// A duplicate email surfaces as `AppError::EmailAlreadyExists`.
pub async fn insert_user(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(pool)
        .await
        .map_err(AppError::from_insert)?;

    Ok(result.last_insert_rowid())
}

/// All users in the store's natural (insertion) order. Passwords are not read.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Delete a user by id, returning how many rows were removed (0 or 1)
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
