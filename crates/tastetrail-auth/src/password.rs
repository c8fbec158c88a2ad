//! bcrypt password hashing.

use crate::error::AuthError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

/// Hash a password. CPU-bound: call from a blocking task in async code.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a stored hash. Malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
