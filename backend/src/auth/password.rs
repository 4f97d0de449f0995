//! Password hashing
//!
//! New hashes are argon2id. Accounts imported from the legacy store carry
//! bcrypt hashes (`$2a$`, `$2b$`, `$2y$`); those still verify and are flagged
//! for rehashing so they migrate on the next successful login.
//!
//! Both algorithms are CPU-intensive; async callers use the `_async`
//! variants which run on the blocking pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2id (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against an argon2 or legacy bcrypt hash (blocking)
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if Self::is_legacy_hash(hash) {
            return bcrypt::verify(password, hash)
                .map_err(|e| anyhow::anyhow!("Invalid bcrypt hash: {}", e));
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Whether the hash was produced by the legacy bcrypt scheme
    pub fn is_legacy_hash(hash: &str) -> bool {
        BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
    }
}
