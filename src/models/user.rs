use sqlx::FromRow;

use crate::security::hash_password;

/// User row as shown on the dashboard (never carries the password digest)
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A validated signup about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// SHA-256 hex digest, never the plaintext
    pub password_hash: String,
}

impl NewUser {
    /// Build a record from already-validated input, hashing the password
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: hash_password(password),
        }
    }
}
