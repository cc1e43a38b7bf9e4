pub mod dashboard;
pub mod delete;
pub mod health;
pub mod signup;
pub mod validation;

pub use dashboard::dashboard;
pub use delete::delete_user;
pub use health::health_check;
pub use signup::{signup, signup_form};
