use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::constants::{DASHBOARD_PATH, ERR_EMAIL_EXISTS};
use crate::db::users::insert_user;
use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::routes::validation::validate_signup;
use crate::views::signup_page;
use crate::AppState;

/// Submitted signup form. Absent fields are empty strings.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Collect the form from raw key/value pairs
    ///
    /// When a key is repeated the first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut username = None;
        let mut email = None;
        let mut password = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut username,
                "email" => &mut email,
                "password" => &mut password,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            username: username.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

/// Render the empty signup form
///
/// GET /
pub async fn signup_form() -> Html<String> {
    signup_page(None)
}

/// Register a new user
///
/// Username and email are trimmed, the password is taken as-is. On success
/// the user is redirected to the dashboard; validation failures and duplicate
/// emails re-render the form with a single error message.
///
/// POST /
pub async fn signup(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = SignupForm::from_pairs(pairs);
    let username = form.username.trim();
    let email = form.email.trim();

    if let Err(err) = validate_signup(username, email, &form.password) {
        tracing::debug!("Signup rejected: {}", err);
        return Ok(signup_page(Some(err.message())).into_response());
    }

    let user = NewUser::new(username, email, &form.password);

    match insert_user(&state.db, &user).await {
        Ok(id) => {
            tracing::info!(user_id = id, "New user registered");
            Ok(Redirect::to(DASHBOARD_PATH).into_response())
        }
        Err(AppError::EmailAlreadyExists) => {
            tracing::info!("Signup rejected: email already registered");
            Ok(signup_page(Some(ERR_EMAIL_EXISTS)).into_response())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_collects_fields() {
        let form = SignupForm::from_pairs(pairs(&[
            ("username", "alice"),
            ("email", "alice@example.com"),
            ("password", "secret1"),
        ]));

        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.password, "secret1");
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let form = SignupForm::from_pairs(pairs(&[
            ("username", "a"),
            ("username", "b"),
            ("email", "a@example.com"),
            ("password", "secret1"),
            ("password", "other22"),
        ]));

        assert_eq!(form.username, "a");
        assert_eq!(form.password, "secret1");
    }

    #[test]
    fn test_from_pairs_missing_and_unknown_keys() {
        let form = SignupForm::from_pairs(pairs(&[("username", "alice"), ("extra", "x")]));

        assert_eq!(
            form,
            SignupForm {
                username: "alice".to_string(),
                ..SignupForm::default()
            }
        );
    }
}
