//! One-way password hashing for the credential store.
//!
//! Argon2 is CPU bound, so both operations run on tokio's blocking pool.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::server::error::Error;

/// Hashes `password` with argon2 and a random salt, returning a PHC string.
pub async fn hash_password(password: &str) -> Result<String, Error> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks `password` against a stored PHC string. Malformed hashes never verify.
///
/// # Returns
/// - `Ok(bool)` - Whether the password matches
/// - `Err(Error::InternalError)` - The blocking verification task could not complete
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))
}

fn hash_blocking(password: &str) -> Result<String, Error> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| Error::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(phc)
}

fn verify_blocking(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}
