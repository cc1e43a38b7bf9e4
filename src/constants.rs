/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Loose `local@domain.tld` shape, matched from the start of the address
pub const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+";

// =============================================================================
// Paths
// =============================================================================

pub const SIGNUP_PATH: &str = "/";

pub const DASHBOARD_PATH: &str = "/dashboard";

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_FIELDS_REQUIRED: &str = "All fields are required.";

pub const ERR_INVALID_EMAIL: &str = "Invalid email format.";

pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Shown when the UNIQUE constraint on `users.email` rejects an insert
pub const ERR_EMAIL_EXISTS: &str = "Email already exists!";
