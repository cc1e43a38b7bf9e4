use sha2::{Digest, Sha256};

/// Compute the stored digest of a password
///
/// Returns the SHA-256 of the UTF-8 bytes as 64 lowercase hex characters.
/// No salt and a single round: equal passwords always yield equal digests.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
