//! Server-rendered HTML pages.
//!
//! Every dynamic value is escaped with `html_escape` before it is written.

use axum::response::Html;
use html_escape::encode_text;
use std::fmt::Write;

use crate::constants::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::models::User;

/// Path of the delete link for a user row
pub fn delete_path(id: i64) -> String {
    format!("/delete/{}", id)
}

/// Signup form, with an optional error shown above it
///
/// Inputs are always rendered empty; submitted values are not echoed back.
pub fn signup_page(error: Option<&str>) -> Html<String> {
    let error_html = match error {
        Some(message) => format!(
            "\n    <p style=\"color:red;\">{}</p>",
            encode_text(message)
        ),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Signup</title>
</head>
<body>
    <h2>Signup Form</h2>{error_html}
    <form method="post">
        <label>Username:</label><br>
        <input type="text" name="username"><br><br>
        <label>Email:</label><br>
        <input type="email" name="email"><br><br>
        <label>Password:</label><br>
        <input type="password" name="password"><br><br>
        <button type="submit">Sign Up</button>
    </form>
    <br>
    <a href="{dashboard}">Go to Dashboard</a>
</body>
</html>
"#,
        dashboard = DASHBOARD_PATH,
    ))
}

/// Table of registered users, one row per user with a delete link
pub fn dashboard_page(users: &[User]) -> Html<String> {
    let mut rows = String::new();
    for user in users {
        // Writing into a String cannot fail
        let _ = write!(
            rows,
            r#"
        <tr>
            <td>{id}</td>
            <td>{username}</td>
            <td>{email}</td>
            <td><a href="{delete}">Delete</a></td>
        </tr>"#,
            id = user.id,
            username = encode_text(&user.username),
            email = encode_text(&user.email),
            delete = delete_path(user.id),
        );
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard</title>
</head>
<body>
    <h2>Registered Users</h2>
    <table border="1" cellpadding="10">
        <tr>
            <th>ID</th><th>Username</th><th>Email</th><th>Action</th>
        </tr>{rows}
    </table>
    <br>
    <a href="{signup}">Back to Signup</a>
</body>
</html>
"#,
        signup = SIGNUP_PATH,
    ))
}
