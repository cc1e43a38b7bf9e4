use axum::{extract::State, response::Html};

use crate::db::users::list_users;
use crate::error::Result;
use crate::views::dashboard_page;
use crate::AppState;

/// List every registered user in insertion order
///
/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>> {
    let users = list_users(&state.db).await?;
    Ok(dashboard_page(&users))
}
