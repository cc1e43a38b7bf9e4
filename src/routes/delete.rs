use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::constants::DASHBOARD_PATH;
use crate::db::users;
use crate::error::{AppError, Result};
use crate::AppState;

/// Parse a path id, accepting only plain non-negative integers
pub fn parse_user_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Delete a user by id
///
/// Deleting an id that does not exist is a no-op. Either way the client is
/// sent back to the dashboard. A non-numeric id is a 404.
///
/// GET /delete/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect> {
    let id = parse_user_id(&raw_id).ok_or(AppError::NotFound)?;

    let removed = users::delete_user(&state.db, id).await?;
    if removed > 0 {
        tracing::info!(user_id = id, "User deleted");
    } else {
        tracing::debug!(user_id = id, "Delete requested for unknown user");
    }

    Ok(Redirect::to(DASHBOARD_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1"), Some(1));
        assert_eq!(parse_user_id("0042"), Some(42));
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("+1"), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("1.5"), None);
        // Overflows i64
        assert_eq!(parse_user_id("99999999999999999999"), None);
    }
}
